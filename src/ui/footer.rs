// SPDX-License-Identifier: MPL-2.0
//! Site footer: link columns and the copyright line.

use crate::app::page::{NavLink, Page};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{button, rule, Column, Container, Row, Text},
    Element, Length,
};

/// A titled group of footer links.
#[derive(Debug, Clone, Copy)]
pub struct LinkColumn {
    pub title_key: &'static str,
    pub links: &'static [NavLink],
}

pub const COLUMNS: [LinkColumn; 2] = [
    LinkColumn {
        title_key: "footer-section-explore",
        links: &[
            NavLink::new("nav-jobs", "/jobs"),
            NavLink::new("nav-blog", "/blog"),
        ],
    },
    LinkColumn {
        title_key: "footer-section-company",
        links: &[
            NavLink::new("nav-about", "/about"),
            NavLink::new("nav-home", "/"),
        ],
    },
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Year shown in the copyright line.
    pub year: i32,
}

impl<'a> ViewContext<'a> {
    /// Context stamped with the current local year.
    pub fn now(i18n: &'a I18n) -> Self {
        Self {
            i18n,
            year: chrono::Local::now().year(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Page),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(page) => Event::Navigate(page),
    }
}

/// Copyright line for `year` in the current locale.
pub fn copyright(i18n: &I18n, year: i32) -> String {
    i18n.tr_with_args("footer-copyright", &[("year", &year.to_string())])
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let columns = COLUMNS.iter().fold(
        Row::new().spacing(spacing::XXL),
        |row, column| row.push(build_column(ctx.i18n, column)),
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .padding([spacing::LG, spacing::MD])
        .push(columns)
        .push(rule::horizontal(1))
        .push(Text::new(ctx.i18n.tr("brand-tagline")).size(typography::BODY_SM))
        .push(Text::new(copyright(ctx.i18n, ctx.year)).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::footer_bar)
        .into()
}

fn build_column<'a>(i18n: &'a I18n, column: &LinkColumn) -> Element<'a, Message> {
    let title = Text::new(i18n.tr(column.title_key)).size(typography::TITLE_SM);

    column
        .links
        .iter()
        .fold(Column::new().spacing(spacing::XXS).push(title), |col, link| {
            col.push(
                button(Text::new(i18n.tr(link.label_key)).size(typography::BODY))
                    .on_press(Message::Navigate(link.page()))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::text_link),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn footer_links_resolve_to_known_pages() {
        for column in COLUMNS {
            for link in column.links {
                assert_eq!(Page::try_from_path(link.path), Some(link.page()));
            }
        }
    }

    #[test]
    fn copyright_contains_year() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let line = copyright(&i18n, 2031);
        assert!(line.contains("2031"), "{line}");
        assert!(!line.starts_with("MISSING"));
    }

    #[test]
    fn navigate_message_becomes_event() {
        assert_eq!(
            update(Message::Navigate(Page::About)),
            Event::Navigate(Page::About)
        );
    }
}
