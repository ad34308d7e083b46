// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the site's pages.
//!
//! The `App` struct wires together localization, configuration, the toast
//! host, diagnostics, and the ad service, and translates messages into state
//! changes. Startup policy (which page opens first, which warnings surface as
//! toasts) lives in [`App::new`].

mod message;
pub mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use page::{NavLink, Page};

use crate::config::{self, AdsConfig, Config};
use crate::diagnostics::{
    default_export_directory, DiagnosticsCollector, ErrorEvent, WarningEvent,
};
use crate::domain::notifications::DismissDelay;
use crate::i18n::fluent::I18n;
use crate::ui::ads::{self, AdService, PlaceholderAdService};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    page: Page,
    /// Whether the compact header menu is open.
    menu_open: bool,
    /// Window is narrower than the compact breakpoint.
    compact: bool,
    theme_mode: ThemeMode,
    /// Countdown given to toasts raised by page actions.
    toast_delay: DismissDelay,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Where diagnostics reports are written.
    export_dir: PathBuf,
    ads: Box<dyn AdService>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("menu_open", &self.menu_open)
            .field("compact", &self.compact)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n: I18n::default(),
            page: Page::Home,
            menu_open: false,
            compact: false,
            theme_mode: ThemeMode::System,
            toast_delay: DismissDelay::default(),
            notifications,
            diagnostics,
            export_dir: default_export_directory(),
            ads: Box::new(PlaceholderAdService::default()),
        }
    }
}

impl App {
    /// Initializes application state from the launch flags and the config
    /// file. Nothing here aborts startup: problems surface as warning toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::from_config(&config, flags.lang.clone());
        let now = Instant::now();

        if let Some(key) = config_warning {
            app.warn(&key, now);
        }

        app.init_ads(&config.ads, now);

        if let Some(path) = flags.page.as_deref() {
            match Page::try_from_path(path) {
                Some(page) => app.page = page,
                None => app.warn("notification-unknown-page", now),
            }
        }

        (app, Task::none())
    }

    /// Builds the state that depends only on settings. Ads stay disabled
    /// until [`App::init_ads`] runs.
    pub fn from_config(config: &Config, lang: Option<String>) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications =
            notifications::Manager::with_max_visible(config.notifications.max_visible());
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n: I18n::new(lang, config),
            theme_mode: config.general.theme_mode,
            toast_delay: config.notifications.delay(),
            notifications,
            diagnostics,
            ..Self::default()
        }
    }

    /// Builds the ad service from `[ads]` and runs its one-time setup.
    /// A failure is logged with its cause and raised as a warning toast.
    pub fn init_ads(&mut self, config: &AdsConfig, now: Instant) {
        let (service, outcome) = ads::initialize(config);
        self.ads = service;
        if let Err(err) = outcome {
            self.diagnostics
                .handle()
                .log_error(ErrorEvent::new(format!("ads: {err}")));
            self.warn("notification-ads-init-error", now);
        }
    }

    fn warn(&mut self, key: &str, now: Instant) {
        let text = self.i18n.tr(key);
        self.diagnostics
            .handle()
            .log_warning(WarningEvent::new(format!("startup: {key}")));
        self.notifications
            .push(Notification::warning(text).with_delay(self.toast_delay), now);
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    fn title(&self) -> String {
        let site = self.i18n.tr("window-title");
        let page = self.i18n.tr(self.page.label_key());
        format!("{page} - {site}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let diagnostics = self.diagnostics.handle();
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            page: &mut self.page,
            menu_open: &mut self.menu_open,
            compact: &mut self.compact,
            notifications: &mut self.notifications,
            diagnostics: &diagnostics,
            collector: &self.diagnostics,
            export_dir: &self.export_dir,
            toast_delay: self.toast_delay,
        };
        let task = update::update(&mut ctx, message, Instant::now());
        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: self.page,
            menu_open: self.menu_open,
            compact: self.compact,
            ads: self.ads.as_ref(),
            notifications: &self.notifications,
        })
    }
}
