// SPDX-License-Identifier: MPL-2.0
//! Labelled box reserving the space of an ad slot.

use super::service::AdService;
use super::AdSlot;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Space, Text},
    Element, Length,
};

/// Renders `slot`, or an empty element when the service is not ready.
pub fn view<'a, M: 'a>(service: &dyn AdService, slot: AdSlot, i18n: &I18n) -> Element<'a, M> {
    if !service.is_ready() {
        return Space::new()
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let dims = slot.format.dimensions();
    let width = dims.width.map_or(Length::Fill, Length::Fixed);

    let label = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("ad-label")).size(typography::BODY_SM))
        .push(
            Text::new(format!("{} \u{00b7} {}", slot.slot_id, slot.format))
                .size(typography::CAPTION),
        );

    Container::new(label)
        .width(width)
        .height(Length::Fixed(dims.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::ad_slot)
        .into()
}
