// SPDX-License-Identifier: MPL-2.0
//! Page bodies shown between the header and the footer.
//!
//! Each page follows the same "state down, messages up" shape as the other
//! components: a `ViewContext`, and where the page has actions, a `Message`,
//! an `Event`, and an `update` function translating one into the other.

pub mod about;
pub mod blog;
pub mod home;
pub mod jobs;

use crate::ui::design_tokens::{sizing, spacing, typography};
use chrono::NaiveDate;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Date format used for posting and publication dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Centers page content and caps its width.
pub(crate) fn page_frame<'a, M: 'a>(content: Column<'a, M>) -> Element<'a, M> {
    Container::new(
        content
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

pub(crate) fn page_title<'a>(title: String) -> Text<'a> {
    Text::new(title).size(typography::TITLE_LG)
}

/// Lays cards out two per row, or one per row in compact mode.
pub(crate) fn card_grid<'a, M: 'a>(cards: Vec<Element<'a, M>>, compact: bool) -> Element<'a, M> {
    let per_row = if compact { 1 } else { 2 };
    let mut grid = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0;

    for card in cards {
        row = row.push(card);
        in_row += 1;
        if in_row == per_row {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_iso_formatted() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date");
        assert_eq!(format_date(date), "2026-03-07");
    }
}
