// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of a mounted toast.
//!
//! A [`ToastInstance`] owns the countdown started when it is mounted and the
//! dismissal callback handed over by the caller. The callback runs at most
//! once: the first of [`ToastInstance::tick`] reaching the deadline or
//! [`ToastInstance::close`] takes it out of the instance. Cancelling, or
//! dropping the instance, discards the callback without running it, so a
//! removed toast can never dismiss itself later.
//!
//! Time is passed in explicitly. The application feeds the `Instant` carried
//! by its tick subscription; tests feed logical instants.

use super::notification::{Notification, NotificationId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Callback invoked when a toast is dismissed.
pub type DismissCallback = Box<dyn FnOnce() + Send + 'static>;

/// What ended a toast's visible lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// The countdown elapsed.
    Timeout,
    /// The close control was activated.
    UserClosed,
}

/// Where an instance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, countdown running, callback still owned.
    Pending,
    /// Callback has run.
    Dismissed(DismissReason),
    /// Removed before dismissal; callback discarded.
    Cancelled,
}

/// A toast mounted on screen with its running countdown.
pub struct ToastInstance {
    notification: Notification,
    /// `None` when the countdown reaches past the representable clock.
    deadline: Option<Instant>,
    on_dismiss: Option<DismissCallback>,
    phase: Phase,
}

impl ToastInstance {
    /// Mounts a toast at `now` and starts its countdown.
    pub fn mount(
        notification: Notification,
        on_dismiss: impl FnOnce() + Send + 'static,
        now: Instant,
    ) -> Self {
        Self::mount_boxed(notification, Box::new(on_dismiss), now)
    }

    /// Same as [`ToastInstance::mount`] for an already boxed callback.
    pub fn mount_boxed(notification: Notification, on_dismiss: DismissCallback, now: Instant) -> Self {
        let deadline = now.checked_add(notification.duration());
        Self {
            notification,
            deadline,
            on_dismiss: Some(on_dismiss),
            phase: Phase::Pending,
        }
    }

    /// Advances the countdown. Fires the callback once `now` reaches the deadline.
    ///
    /// Returns the reason if this call dismissed the toast.
    pub fn tick(&mut self, now: Instant) -> Option<DismissReason> {
        if self.is_pending() && self.is_due(now) {
            self.fire(DismissReason::Timeout)
        } else {
            None
        }
    }

    /// Handles the close control.
    ///
    /// If the deadline already passed without a tick observing it, the
    /// countdown won the race and the toast is reported as timed out.
    pub fn close(&mut self, now: Instant) -> Option<DismissReason> {
        if !self.is_pending() {
            return None;
        }
        if self.is_due(now) {
            self.fire(DismissReason::Timeout)
        } else {
            self.fire(DismissReason::UserClosed)
        }
    }

    /// Cancels the countdown without running the callback.
    ///
    /// Returns `true` if the toast was still pending.
    pub fn cancel(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.on_dismiss = None;
        self.phase = Phase::Cancelled;
        true
    }

    fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    fn fire(&mut self, reason: DismissReason) -> Option<DismissReason> {
        let callback = self.on_dismiss.take()?;
        self.phase = Phase::Dismissed(reason);
        callback();
        Some(reason)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.notification.id()
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// When the countdown fires, if that instant is representable.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the countdown fires; zero once it is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map_or(Duration::MAX, |deadline| deadline.saturating_duration_since(now))
    }

    /// Fraction of the countdown still left, from 1.0 at mount to 0.0 at the deadline.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        let total = self.notification.duration().as_secs_f64();
        if total <= 0.0 {
            return 0.0;
        }
        (self.remaining(now).as_secs_f64() / total).clamp(0.0, 1.0) as f32
    }
}

impl Drop for ToastInstance {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for ToastInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastInstance")
            .field("notification", &self.notification)
            .field("deadline", &self.deadline)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
