// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! These events describe what the visitor did on the site and how each toast
//! notification ended its life. They are the application's log records.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::ui::notifications::{DismissReason, NotificationId, Severity};

/// Visitor-initiated actions captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Followed a header, footer, or in-page link.
    Navigate {
        /// Target path (e.g. `/blog`).
        path: String,
    },

    /// Opened or closed the compact header menu.
    ToggleMenu {
        /// Menu state after the toggle.
        open: bool,
    },

    /// Signed up for job alerts from the home page.
    SubscribeAlerts,

    /// Pressed "apply" on a job card.
    ApplyToJob {
        /// Job slug.
        slug: String,
    },

    /// Pressed the close control of a toast.
    CloseToast,

    /// Asked for a diagnostics report from the about page.
    ExportDiagnostics,
}

/// Lifecycle transitions of a toast notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "lifecycle", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// The toast was mounted and its countdown started.
    Shown {
        id: u64,
        severity: Severity,
        duration_ms: u64,
    },

    /// The toast fired its dismissal callback.
    Dismissed { id: u64, reason: DismissReason },

    /// The host removed the toast before it fired; the countdown was cancelled.
    Cancelled { id: u64 },

    /// The toast was accepted but is waiting for a free slot.
    Queued { id: u64 },
}

impl NotificationEvent {
    pub(crate) fn shown(id: NotificationId, severity: Severity, duration_ms: u64) -> Self {
        Self::Shown {
            id: id.value(),
            severity,
            duration_ms,
        }
    }

    pub(crate) fn dismissed(id: NotificationId, reason: DismissReason) -> Self {
        Self::Dismissed {
            id: id.value(),
            reason,
        }
    }

    pub(crate) fn cancelled(id: NotificationId) -> Self {
        Self::Cancelled { id: id.value() }
    }

    pub(crate) fn queued(id: NotificationId) -> Self {
        Self::Queued { id: id.value() }
    }
}

/// Non-critical issue (e.g. config fell back to defaults).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Critical issue surfaced to the visitor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        #[serde(flatten)]
        action: UserAction,
    },
    Notification {
        #[serde(flatten)]
        event: NotificationEvent,
    },
    Warning {
        #[serde(flatten)]
        event: WarningEvent,
    },
    Error {
        #[serde(flatten)]
        event: ErrorEvent,
    },
}
