// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the host of the toast stack: it mounts instances, limits
//! how many are visible, queues the rest, and removes instances once they are
//! dismissed. Queued toasts are not mounted yet, so their countdown only
//! starts when a slot frees up.

use super::instance::{DismissCallback, DismissReason, ToastInstance};
use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, NotificationEvent, WarningEvent};
use crate::domain::notifications::MaxVisible;
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close control of a specific notification was pressed.
    Dismiss(NotificationId),
    /// Periodic tick carrying the current time, for auto-dismiss.
    Tick(Instant),
}

/// A notification accepted but not yet mounted.
struct Queued {
    notification: Notification,
    on_dismiss: DismissCallback,
}

/// Manages the notification queue and visible notifications.
#[derive(Default)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<ToastInstance>,
    /// Notifications waiting for a free slot.
    queue: VecDeque<Queued>,
    max_visible: MaxVisible,
    /// Latest instant handed to the manager.
    last_seen: Option<Instant>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("visible", &self.visible)
            .field("queued", &self.queue.len())
            .field("max_visible", &self.max_visible)
            .finish()
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_visible(max_visible: MaxVisible) -> Self {
        Self {
            max_visible,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a notification with no caller-side dismissal callback.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.push_with_callback(notification, || {}, now);
    }

    /// Pushes a notification; `on_dismiss` runs once when it is dismissed.
    ///
    /// If fewer than the maximum are showing, the toast is mounted at `now`.
    /// Otherwise it waits in the queue and is mounted when space frees up.
    /// Warnings and errors are mirrored to diagnostics.
    pub fn push_with_callback(
        &mut self,
        notification: Notification,
        on_dismiss: impl FnOnce() + Send + 'static,
        now: Instant,
    ) {
        self.observe(now);
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => {
                    handle.log_warning(WarningEvent::new(notification.message()));
                }
                Severity::Error => {
                    handle.log_error(ErrorEvent::new(notification.message()));
                }
                Severity::Success | Severity::Info => {}
            }
        }

        let queued = Queued {
            notification,
            on_dismiss: Box::new(on_dismiss),
        };

        if self.visible.len() < self.max_visible.value() {
            let instance = self.mount(queued, now);
            self.visible.push_front(instance);
        } else {
            self.log(NotificationEvent::queued(queued.notification.id()));
            self.queue.push_back(queued);
        }
    }

    /// Handles the close control of a toast.
    ///
    /// Returns `true` if the notification was found and removed. A queued
    /// notification was never shown, so its callback is discarded.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.observe(now);
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            if let Some(mut instance) = self.visible.remove(pos) {
                if let Some(reason) = instance.close(now) {
                    self.log(NotificationEvent::dismissed(id, reason));
                }
            }
            self.promote_from_queue(now);
            return true;
        }

        self.drop_queued(id)
    }

    /// Removes a toast without dismissing it, cancelling its countdown.
    ///
    /// Returns `true` if the notification was found.
    pub fn remove(&mut self, id: NotificationId, now: Instant) -> bool {
        self.observe(now);
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            if let Some(mut instance) = self.visible.remove(pos) {
                if instance.cancel() {
                    self.log(NotificationEvent::cancelled(id));
                }
            }
            self.promote_from_queue(now);
            return true;
        }

        self.drop_queued(id)
    }

    /// Dismisses every visible toast whose countdown has elapsed at `now`.
    ///
    /// Returns the IDs dismissed by this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        self.observe(now);
        let mut fired = Vec::new();
        for instance in &mut self.visible {
            if let Some(reason) = instance.tick(now) {
                fired.push((instance.id(), reason));
            }
        }

        if fired.is_empty() {
            return Vec::new();
        }

        self.visible.retain(ToastInstance::is_pending);
        for (id, reason) in &fired {
            self.log(NotificationEvent::dismissed(*id, *reason));
        }
        self.promote_from_queue(now);

        fired.into_iter().map(|(id, _)| id).collect()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::Tick(at) => {
                self.tick(*at);
            }
        }
    }

    /// Returns the currently visible toasts.
    pub fn visible(&self) -> impl Iterator<Item = &ToastInstance> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Latest instant seen by `push`, `dismiss`, `remove` or `tick`.
    #[must_use]
    pub fn last_seen(&self) -> Option<Instant> {
        self.last_seen
    }

    /// Removes everything, cancelling every pending countdown.
    pub fn clear(&mut self) {
        let cancelled: Vec<NotificationId> = self
            .visible
            .iter_mut()
            .filter_map(|instance| instance.cancel().then(|| instance.id()))
            .collect();
        self.visible.clear();
        self.queue.clear();

        for id in cancelled {
            self.log(NotificationEvent::cancelled(id));
        }
    }

    fn observe(&mut self, now: Instant) {
        self.last_seen = Some(self.last_seen.map_or(now, |seen| seen.max(now)));
    }

    fn mount(&self, queued: Queued, now: Instant) -> ToastInstance {
        let notification = queued.notification;
        self.log(NotificationEvent::shown(
            notification.id(),
            notification.severity(),
            notification.delay().as_millis(),
        ));
        ToastInstance::mount_boxed(notification, queued.on_dismiss, now)
    }

    fn drop_queued(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.queue.iter().position(|q| q.notification.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Mounts queued notifications while there's space.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.max_visible.value() {
            if let Some(queued) = self.queue.pop_front() {
                let instance = self.mount(queued, now);
                self.visible.push_front(instance);
            } else {
                break;
            }
        }
    }

    fn log(&self, event: NotificationEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_notification(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::test_utils::CallCounter;
    use std::time::Duration;

    const MAX: usize = 3;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
        assert!(manager.last_seen().is_none());
    }

    #[test]
    fn push_adds_to_visible_when_space_available() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"), Instant::now());

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        let t0 = Instant::now();

        for i in 0..MAX {
            manager.push(Notification::success(format!("test-{i}")), t0);
        }
        manager.push(Notification::success("queued"), t0);

        assert_eq!(manager.visible_count(), MAX);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn max_visible_is_configurable() {
        let mut manager = Manager::with_max_visible(MaxVisible::new(1));
        let t0 = Instant::now();
        manager.push(Notification::info("a"), t0);
        manager.push(Notification::info("b"), t0);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_runs_callback_and_removes() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let counter = CallCounter::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push_with_callback(notification, counter.callback(), t0);
        assert!(manager.dismiss(id, t0 + ms(200)));

        assert_eq!(counter.count(), 1);
        assert_eq!(manager.visible_count(), 0);

        manager.tick(t0 + ms(5000));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn remove_cancels_without_callback() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let counter = CallCounter::new();
        let notification = Notification::info("gone");
        let id = notification.id();

        manager.push_with_callback(notification, counter.callback(), t0);
        assert!(manager.remove(id, t0 + ms(100)));
        assert!(manager.tick(t0 + ms(5000)).is_empty());
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn tick_dismisses_expired_toasts_only() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let short = Notification::info("short").with_duration(ms(1000));
        let short_id = short.id();
        manager.push(short, t0);
        manager.push(Notification::info("long"), t0);

        assert!(manager.tick(t0 + ms(999)).is_empty());
        assert_eq!(manager.tick(t0 + ms(1000)), vec![short_id]);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.last_seen(), Some(t0 + ms(1000)));
    }

    #[test]
    fn queued_countdown_starts_on_promotion() {
        let mut manager = Manager::with_max_visible(MaxVisible::new(1));
        let t0 = Instant::now();
        let first = Notification::info("first").with_duration(ms(1000));
        let second = Notification::info("second").with_duration(ms(1000));
        let second_id = second.id();
        manager.push(first, t0);
        manager.push(second, t0);

        manager.tick(t0 + ms(1000));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);

        // Promoted at t0+1000, so it is due at t0+2000 rather than t0+1000.
        assert!(manager.tick(t0 + ms(1500)).is_empty());
        assert_eq!(manager.tick(t0 + ms(2000)), vec![second_id]);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let mut first_id = None;
        for i in 0..MAX {
            let n = Notification::success(format!("visible-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push(n, t0);
        }
        manager.push(Notification::success("queued"), t0);

        manager.dismiss(first_id.unwrap(), t0);

        assert_eq!(manager.visible_count(), MAX);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismissing_queued_notification_discards_callback() {
        let mut manager = Manager::with_max_visible(MaxVisible::new(1));
        let t0 = Instant::now();
        let counter = CallCounter::new();
        manager.push(Notification::info("shown"), t0);
        let queued = Notification::info("waiting");
        let queued_id = queued.id();
        manager.push_with_callback(queued, counter.callback(), t0);

        assert!(manager.dismiss(queued_id, t0));
        assert_eq!(manager.queued_count(), 0);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id, Instant::now()));
        assert!(!manager.remove(fake_id, Instant::now()));
    }

    #[test]
    fn clear_cancels_all() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let counter = CallCounter::new();

        for i in 0..5 {
            manager.push_with_callback(
                Notification::success(format!("test-{i}")),
                counter.callback(),
                t0,
            );
        }

        manager.clear();
        manager.tick(t0 + ms(60_000));
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let a = Notification::info("a");
        let a_id = a.id();
        manager.push(a, t0);
        manager.push(Notification::info("b").with_duration(ms(10)), t0);

        manager.handle_message(&Message::Dismiss(a_id), t0);
        assert_eq!(manager.visible_count(), 1);

        manager.handle_message(&Message::Tick(t0 + ms(10)), t0 + ms(10));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn lifecycle_is_logged_to_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());
        let t0 = Instant::now();

        let warning = Notification::warning("disk almost full");
        let warning_id = warning.id();
        manager.push(warning, t0);
        manager.dismiss(warning_id, t0 + ms(10));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Warning { .. }));
        assert!(matches!(
            kinds[1],
            DiagnosticEventKind::Notification {
                event: NotificationEvent::Shown { .. }
            }
        ));
        assert_eq!(
            kinds[2],
            DiagnosticEventKind::Notification {
                event: NotificationEvent::Dismissed {
                    id: warning_id.value(),
                    reason: DismissReason::UserClosed,
                }
            }
        );
    }

    #[test]
    fn promoted_toast_is_shown_newest_first() {
        let mut manager = Manager::with_max_visible(MaxVisible::new(2));
        let t0 = Instant::now();
        let oldest = Notification::info("oldest");
        let oldest_id = oldest.id();
        let middle = Notification::info("middle");
        let middle_id = middle.id();
        let waiting = Notification::info("waiting");
        let waiting_id = waiting.id();
        manager.push(oldest, t0);
        manager.push(middle, t0);
        manager.push(waiting, t0);

        manager.dismiss(oldest_id, t0 + ms(10));

        let order: Vec<_> = manager.visible().map(ToastInstance::id).collect();
        assert_eq!(order, vec![waiting_id, middle_id]);
    }

    #[test]
    fn last_seen_never_moves_backwards() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.push(Notification::info("a"), t0 + ms(50));
        manager.tick(t0 + ms(20));
        assert_eq!(manager.last_seen(), Some(t0 + ms(50)));
        manager.tick(t0 + ms(80));
        assert_eq!(manager.last_seen(), Some(t0 + ms(80)));
    }
}
