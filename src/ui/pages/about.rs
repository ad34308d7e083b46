// SPDX-License-Identifier: MPL-2.0
//! About page.

use super::{page_frame, page_title};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Text};
use iced::Element;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub enum Message {
    ExportDiagnostics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ExportDiagnostics,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ExportDiagnostics => Event::ExportDiagnostics,
    }
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let export = button(Text::new(i18n.tr("about-export-diagnostics")).size(typography::BODY))
        .on_press(Message::ExportDiagnostics)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .push(page_title(i18n.tr("about-title")))
        .push(Text::new(i18n.tr("about-body")).size(typography::BODY_LG))
        .push(Text::new(i18n.tr("about-contact")).size(typography::BODY))
        .push(export)
        .push(Text::new(format!("v{APP_VERSION}")).size(typography::CAPTION));

    page_frame(content)
}
