// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for visitor feedback.
//!
//! Notifications appear temporarily to confirm actions (alert signup,
//! application sent, etc.) without blocking interaction. Each toast counts
//! down from the moment it is mounted and fires its dismissal callback exactly
//! once, whether the countdown elapses or the visitor closes it. A toast
//! removed by its host before either happens never fires.
//!
//! # Components
//!
//! - [`notification`] - `Notification` configuration and `Severity` levels
//! - [`instance`] - `ToastInstance`, the mounted toast and its countdown
//! - [`manager`] - `Manager`, the host stack with queueing and removal
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("Saved"), Instant::now());
//!
//! // On each tick subscription message
//! manager.tick(now);
//!
//! // In the view function
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod instance;
mod manager;
mod notification;
mod toast;

pub use instance::{DismissCallback, DismissReason, Phase, ToastInstance};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, SeverityIcon, StyleClass};
pub use toast::Toast;
