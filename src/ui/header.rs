// SPDX-License-Identifier: MPL-2.0
//! Site header with the brand and page navigation.
//!
//! On wide windows the navigation links sit inline next to the brand. Below
//! [`sizing::COMPACT_BREAKPOINT`] they collapse behind a hamburger button
//! that opens a dropdown menu.

use crate::app::page::{NavLink, Page, HEADER_LINKS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Page,
    pub menu_open: bool,
    /// Window is narrower than the compact breakpoint.
    pub compact: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Page),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    MenuToggled(bool),
    Navigate(Page),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::MenuToggled(*menu_open)
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(page) => {
            *menu_open = false;
            Event::Navigate(page)
        }
    }
}

/// Whether a window of the given width uses the compact layout.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < sizing::COMPACT_BREAKPOINT
}

/// Render the header.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_MD))
        .on_press(Message::Navigate(Page::Home))
        .padding(spacing::XXS)
        .style(styles::button::text_link);

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        bar = bar.push(build_menu_button(&ctx));
    } else {
        for link in HEADER_LINKS {
            bar = bar.push(build_nav_link(&ctx, link));
        }
    }

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(bar)
            .width(Length::Fill)
            .style(styles::container::header_bar),
    );

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_menu_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (glyph, label_key) = if ctx.menu_open {
        ("\u{2715}", "header-menu-close")
    } else {
        ("\u{2630}", "header-menu-open")
    };

    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(glyph).size(sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr(label_key)).size(typography::BODY_SM));

    button(label)
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::nav_link(ctx.menu_open))
        .into()
}

fn build_nav_link<'a>(ctx: &ViewContext<'a>, link: NavLink) -> Element<'a, Message> {
    let page = link.page();

    button(Text::new(ctx.i18n.tr(link.label_key)).size(typography::BODY))
        .on_press(Message::Navigate(page))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link(page == ctx.current))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = HEADER_LINKS.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, link| {
            let page = link.page();
            column.push(
                button(Text::new(ctx.i18n.tr(link.label_key)).size(typography::BODY))
                    .on_press(Message::Navigate(page))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::nav_link(page == ctx.current)),
            )
        },
    );

    Container::new(items)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Left)
        .style(styles::container::menu_dropdown)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_flag_and_reports_state() {
        let mut menu_open = false;
        assert_eq!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::MenuToggled(true)
        );
        assert!(menu_open);
        assert_eq!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::MenuToggled(false)
        );
        assert!(!menu_open);
    }

    #[test]
    fn navigating_closes_menu() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Page::Blog), &mut menu_open);
        assert_eq!(event, Event::Navigate(Page::Blog));
        assert!(!menu_open);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        assert_eq!(update(Message::CloseMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn compact_below_breakpoint() {
        assert!(is_compact(sizing::COMPACT_BREAKPOINT - 1.0));
        assert!(!is_compact(sizing::COMPACT_BREAKPOINT));
    }

    #[test]
    fn view_builds_in_both_layouts() {
        let i18n = I18n::default();
        for (compact, menu_open) in [(false, false), (true, false), (true, true)] {
            let _element = view(ViewContext {
                i18n: &i18n,
                current: Page::Jobs,
                menu_open,
                compact,
            });
        }
    }
}
