// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives the slice of state it may touch through
//! [`UpdateContext`] plus the instant the message is handled at, which
//! keeps toast timing deterministic under test.

use super::{Message, Page};
use crate::diagnostics::{DiagnosticsCollector, DiagnosticsHandle, UserAction};
use crate::domain::notifications::DismissDelay;
use crate::i18n::fluent::I18n;
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::notifications::{self, Notification, NotificationMessage};
use crate::ui::pages::about::{self, Event as AboutEvent};
use crate::ui::pages::home::{self, Event as HomeEvent};
use crate::ui::pages::jobs::{self, Event as JobsEvent};
use iced::{Size, Task};
use std::path::Path;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a mut Page,
    pub menu_open: &'a mut bool,
    pub compact: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
    /// Buffered events, read when a report is exported.
    pub collector: &'a DiagnosticsCollector,
    pub export_dir: &'a Path,
    pub toast_delay: DismissDelay,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Header(msg) => handle_header_message(ctx, msg),
        Message::Footer(msg) => handle_footer_message(ctx, msg),
        Message::Home(msg) => handle_home_message(ctx, &msg, now),
        Message::Jobs(msg) => handle_jobs_message(ctx, &msg, now),
        Message::About(msg) => handle_about_message(ctx, &msg, now),
        Message::Notification(msg) => handle_notification_message(ctx, &msg, now),
        Message::Tick(instant) => {
            ctx.notifications.tick(instant);
            Task::none()
        }
        Message::WindowResized(size) => handle_window_resized(ctx, size),
    }
}

/// Switches page and records the navigation.
pub fn navigate(ctx: &mut UpdateContext<'_>, page: Page) {
    ctx.diagnostics.log_action(UserAction::Navigate {
        path: page.path().to_string(),
    });
    *ctx.page = page;
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, ctx.menu_open) {
        HeaderEvent::None => {}
        HeaderEvent::MenuToggled(open) => {
            ctx.diagnostics.log_action(UserAction::ToggleMenu { open });
        }
        HeaderEvent::Navigate(page) => navigate(ctx, page),
    }
    Task::none()
}

pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::Navigate(page) => {
            *ctx.menu_open = false;
            navigate(ctx, page);
        }
    }
    Task::none()
}

pub fn handle_home_message(
    ctx: &mut UpdateContext<'_>,
    message: &home::Message,
    now: Instant,
) -> Task<Message> {
    match home::update(message) {
        HomeEvent::BrowseJobs => navigate(ctx, Page::Jobs),
        HomeEvent::Subscribed => {
            ctx.diagnostics.log_action(UserAction::SubscribeAlerts);
            let toast = Notification::success(ctx.i18n.tr("toast-subscribed"))
                .with_delay(ctx.toast_delay);
            ctx.notifications.push(toast, now);
        }
    }
    Task::none()
}

pub fn handle_jobs_message(
    ctx: &mut UpdateContext<'_>,
    message: &jobs::Message,
    now: Instant,
) -> Task<Message> {
    match jobs::update(message) {
        JobsEvent::None => {}
        JobsEvent::Applied { slug, title } => {
            ctx.diagnostics.log_action(UserAction::ApplyToJob {
                slug: slug.to_string(),
            });
            let text = ctx
                .i18n
                .tr_with_args("toast-application-sent", &[("title", title)]);
            ctx.notifications
                .push(Notification::info(text).with_delay(ctx.toast_delay), now);
        }
    }
    Task::none()
}

pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: &about::Message,
    now: Instant,
) -> Task<Message> {
    match about::update(message) {
        AboutEvent::ExportDiagnostics => {
            ctx.diagnostics.log_action(UserAction::ExportDiagnostics);
            let toast = match ctx.collector.export_to_dir(ctx.export_dir) {
                Ok(path) => Notification::success(ctx.i18n.tr_with_args(
                    "toast-diagnostics-exported",
                    &[("path", path.display().to_string().as_str())],
                )),
                Err(err) => Notification::error(ctx.i18n.tr_with_args(
                    "toast-diagnostics-export-failed",
                    &[("error", err.to_string().as_str())],
                )),
            };
            ctx.notifications.push(toast.with_delay(ctx.toast_delay), now);
        }
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
    now: Instant,
) -> Task<Message> {
    if matches!(message, NotificationMessage::Dismiss(_)) {
        ctx.diagnostics.log_action(UserAction::CloseToast);
    }
    ctx.notifications.handle_message(message, now);
    Task::none()
}

fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let compact = header::is_compact(size.width);
    if !compact {
        // The dropdown only exists in the compact layout.
        *ctx.menu_open = false;
    }
    *ctx.compact = compact;
    Task::none()
}
