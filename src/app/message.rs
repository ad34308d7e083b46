// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::pages::{about, home, jobs};
use crate::ui::{footer, header};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Footer(footer::Message),
    Home(home::Message),
    Jobs(jobs::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast countdowns.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Optional config directory override; also recorded in `paths`.
    pub config_dir: Option<String>,
    /// Site path to open on launch (e.g. `/jobs`).
    pub page: Option<String>,
}
