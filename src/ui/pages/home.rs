// SPDX-License-Identifier: MPL-2.0
//! Landing page: hero banner, job alert sign-up, and the banner ad slot.

use super::page_frame;
use crate::i18n::fluent::I18n;
use crate::ui::ads::{self, AdService};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub ads: &'a dyn AdService,
}

#[derive(Debug, Clone)]
pub enum Message {
    BrowseJobs,
    Subscribe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BrowseJobs,
    Subscribed,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BrowseJobs => Event::BrowseJobs,
        Message::Subscribe => Event::Subscribed,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let hero = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Left)
        .push(Text::new(ctx.i18n.tr("home-hero-title")).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("home-hero-subtitle")).size(typography::BODY_LG))
        .push(
            button(Text::new(ctx.i18n.tr("home-browse-button")).size(typography::BODY))
                .on_press(Message::BrowseJobs)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let subscribe = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("home-subscribe-title")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("home-subscribe-body")).size(typography::BODY))
        .push(
            button(Text::new(ctx.i18n.tr("home-subscribe-button")).size(typography::BODY))
                .on_press(Message::Subscribe)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let content = Column::new()
        .push(
            Container::new(hero)
                .width(Length::Fill)
                .padding(spacing::XL)
                .style(styles::container::hero),
        )
        .push(
            Container::new(subscribe)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        )
        .push(ads::placeholder::view(
            ctx.ads,
            ads::slots::HOME_BANNER,
            ctx.i18n,
        ));

    page_frame(content)
}
