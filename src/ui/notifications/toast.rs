// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of mounted notifications: small
//! cards with a severity-colored border, the severity glyph, the message,
//! a close control, and a thin bar showing how much of the countdown is left.

use super::instance::ToastInstance;
use super::manager::{Manager, Message};
use super::notification::{Severity, StyleClass};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{
    button, container, progress_bar, text, tooltip, Column, Container, Row, Text,
};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification as seen at `now`.
    pub fn view<'a>(
        toast: &'a ToastInstance,
        now: Instant,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let notification = toast.notification();
        let severity = notification.severity();
        let class = severity.style_class();

        let icon_widget = tooltip(
            Self::severity_icon(severity),
            Text::new(i18n.tr(severity.icon().label_key())).size(typography::CAPTION),
            tooltip::Position::Right,
        );

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("\u{2715}").size(typography::BODY_SM))
            .on_press(Message::Dismiss(toast.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        let dismiss_control = tooltip(
            dismiss_button,
            Text::new(i18n.tr("toast-close")).size(typography::CAPTION),
            tooltip::Position::Left,
        );

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_control);

        let remaining = toast.remaining_fraction(now);
        let countdown = Container::new(progress_bar(0.0..=1.0, remaining))
            .height(Length::Fixed(sizing::TOAST_COUNTDOWN_HEIGHT));

        Container::new(Column::new().spacing(spacing::XS).push(content).push(countdown))
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, class))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    /// Countdown bars reflect the last instant the manager was handed.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = match manager.last_seen() {
            Some(now) => manager
                .visible()
                .map(|toast| Self::view(toast, now, i18n))
                .collect(),
            None => Vec::new(),
        };

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    /// Returns the glyph for the severity level, drawn in its accent color.
    fn severity_icon<'a>(severity: Severity) -> Text<'a> {
        Text::new(severity.icon().glyph())
            .size(sizing::ICON_MD)
            .color(severity.color())
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, class: StyleClass) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: class.accent(),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifications::MaxVisible;
    use crate::ui::notifications::Notification;

    #[test]
    fn toast_container_style_uses_severity_color() {
        let theme = Theme::Dark;
        for severity in Severity::ALL {
            let style = toast_container_style(&theme, severity.style_class());
            assert_eq!(style.border.color, severity.color());
            assert!(style.background.is_some());
        }
    }

    #[test]
    fn dismiss_button_highlights_on_hover_only() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn views_render_for_every_severity() {
        let i18n = I18n::default();
        let now = Instant::now();
        let mut manager = Manager::with_max_visible(MaxVisible::new(Severity::ALL.len()));
        for severity in Severity::ALL {
            manager.push(Notification::new(severity, "message"), now);
        }
        assert_eq!(manager.visible_count(), Severity::ALL.len());
        for toast in manager.visible() {
            let _element = Toast::view(toast, now, &i18n);
        }
        let _overlay = Toast::view_overlay(&manager, &i18n);
    }

    #[test]
    fn empty_overlay_renders() {
        let i18n = I18n::default();
        let manager = Manager::new();
        let _overlay = Toast::view_overlay(&manager, &i18n);
    }
}
