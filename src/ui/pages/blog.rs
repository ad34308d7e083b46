// SPDX-License-Identifier: MPL-2.0
//! Career blog listing.

use super::{format_date, page_frame, page_title};
use crate::i18n::fluent::I18n;
use crate::ui::ads::{self, AdService};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// A blog post summary. Titles and summaries are translation keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: &'static str,
    pub title_key: &'static str,
    pub summary_key: &'static str,
    pub published: NaiveDate,
    pub author: &'static str,
}

fn article(
    slug: &'static str,
    title_key: &'static str,
    summary_key: &'static str,
    (year, month, day): (i32, u32, u32),
    author: &'static str,
) -> Option<Article> {
    Some(Article {
        slug,
        title_key,
        summary_key,
        published: NaiveDate::from_ymd_opt(year, month, day)?,
        author,
    })
}

/// Published articles, newest first.
pub fn articles() -> Vec<Article> {
    let mut list: Vec<Article> = [
        article(
            "writing-a-standout-resume",
            "blog-resume-title",
            "blog-resume-summary",
            (2026, 9, 12),
            "Camille Durand",
        ),
        article(
            "remote-interview-tips",
            "blog-remote-interview-title",
            "blog-remote-interview-summary",
            (2026, 10, 2),
            "Sam Okafor",
        ),
        article(
            "negotiating-your-first-offer",
            "blog-first-offer-title",
            "blog-first-offer-summary",
            (2026, 8, 21),
            "Lena Fischer",
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    list.sort_by(|a, b| b.published.cmp(&a.published));
    list
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub ads: &'a dyn AdService,
}

/// Render the listing. The in-feed ad slot follows the first article.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let mut content = Column::new().push(page_title(ctx.i18n.tr("blog-title")));

    for (index, article) in articles().into_iter().enumerate() {
        content = content.push(build_entry(ctx.i18n, &article));
        if index == 0 {
            content = content.push(ads::placeholder::view(
                ctx.ads,
                ads::slots::BLOG_IN_FEED,
                ctx.i18n,
            ));
        }
    }

    page_frame(content)
}

fn build_entry<'a, M: 'a>(i18n: &I18n, article: &Article) -> Element<'a, M> {
    let byline = i18n.tr_with_args(
        "blog-byline",
        &[
            ("author", article.author),
            ("date", &format_date(article.published)),
        ],
    );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr(article.title_key)).size(typography::TITLE_MD))
        .push(Text::new(byline).size(typography::CAPTION))
        .push(Text::new(i18n.tr(article.summary_key)).size(typography::BODY));

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
