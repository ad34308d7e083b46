// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is the immutable configuration of one toast: its
//! message, its [`Severity`], and how long it stays on screen.

use crate::domain::notifications::DismissDelay;
use crate::error::ParseError;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the icon glyph and the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation completed successfully (green, check mark).
    Success,
    /// Operation failed (red, cross).
    Error,
    /// Something needs attention (orange, alert triangle).
    Warning,
    /// Neutral information (blue, info mark).
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the icon shown in front of the message.
    #[must_use]
    pub fn icon(self) -> SeverityIcon {
        match self {
            Severity::Success => SeverityIcon::Check,
            Severity::Error => SeverityIcon::Cross,
            Severity::Warning => SeverityIcon::Alert,
            Severity::Info => SeverityIcon::Info,
        }
    }

    /// Returns the style class the toast card is drawn with.
    #[must_use]
    pub fn style_class(self) -> StyleClass {
        match self {
            Severity::Success => StyleClass::Check,
            Severity::Error => StyleClass::Cross,
            Severity::Warning => StyleClass::Alert,
            Severity::Info => StyleClass::Info,
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        self.style_class().accent()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            other => Err(ParseError::UnknownSeverity(other.to_string())),
        }
    }
}

/// Icon family drawn for a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityIcon {
    Check,
    Cross,
    Alert,
    Info,
}

impl SeverityIcon {
    /// Returns the glyph rendered for this icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            SeverityIcon::Check => "\u{2714}",
            SeverityIcon::Cross => "\u{2716}",
            SeverityIcon::Alert => "\u{26A0}",
            SeverityIcon::Info => "\u{2139}",
        }
    }

    /// Returns the i18n key of the label read by assistive technology.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SeverityIcon::Check => "toast-icon-success",
            SeverityIcon::Cross => "toast-icon-error",
            SeverityIcon::Alert => "toast-icon-warning",
            SeverityIcon::Info => "toast-icon-info",
        }
    }
}

/// Visual class of a toast card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Check,
    Cross,
    Alert,
    Info,
}

impl StyleClass {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StyleClass::Check => "toast-check",
            StyleClass::Cross => "toast-cross",
            StyleClass::Alert => "toast-alert",
            StyleClass::Info => "toast-info",
        }
    }

    /// Border and glyph color.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            StyleClass::Check => palette::SUCCESS_500,
            StyleClass::Cross => palette::ERROR_500,
            StyleClass::Alert => palette::WARNING_500,
            StyleClass::Info => palette::INFO_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// Configuration is fixed at construction; the builder methods consume
/// `self` so nothing can change once the toast is mounted.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    delay: DismissDelay,
}

impl Notification {
    /// Creates a new notification with the default 5 second countdown.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            delay: DismissDelay::default(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Sets the auto-dismiss countdown. Zero is raised to one millisecond.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.delay = DismissDelay::from_duration(duration);
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: DismissDelay) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn delay(&self) -> DismissDelay {
        self.delay
    }

    /// Returns the auto-dismiss countdown.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.delay.as_duration()
    }
}
