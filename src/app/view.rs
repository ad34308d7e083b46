// SPDX-License-Identifier: MPL-2.0
//! Page layout: header, scrollable body with footer, and the toast overlay.

use super::{Message, Page};
use crate::i18n::fluent::I18n;
use crate::ui::ads::AdService;
use crate::ui::notifications::{self, Toast};
use crate::ui::pages::{about, blog, home, jobs};
use crate::ui::{footer, header};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Borrowed application state needed to render a frame.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: Page,
    pub menu_open: bool,
    pub compact: bool,
    pub ads: &'a dyn AdService,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        current: ctx.page,
        menu_open: ctx.menu_open,
        compact: ctx.compact,
    })
    .map(Message::Header);

    let body = view_page(&ctx);
    let footer = footer::view(footer::ViewContext::now(ctx.i18n)).map(Message::Footer);

    let scroll_area = Column::new().width(Length::Fill).push(body).push(footer);

    let layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(scrollable(scroll_area).height(Length::Fill));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(layout).width(Length::Fill).height(Length::Fill));

    if ctx.notifications.visible_count() > 0 {
        stack = stack.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    stack.into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.page {
        Page::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            ads: ctx.ads,
        })
        .map(Message::Home),
        Page::Jobs => jobs::view(jobs::ViewContext {
            i18n: ctx.i18n,
            ads: ctx.ads,
            compact: ctx.compact,
        })
        .map(Message::Jobs),
        Page::Blog => blog::view(blog::ViewContext {
            i18n: ctx.i18n,
            ads: ctx.ads,
        }),
        Page::About => about::view(ctx.i18n).map(Message::About),
    }
}
