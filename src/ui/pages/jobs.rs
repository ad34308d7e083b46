// SPDX-License-Identifier: MPL-2.0
//! Featured job listings.
//!
//! The listings are a fixed editorial selection compiled into the binary;
//! the site does not fetch postings.

use super::{card_grid, format_date, page_frame, page_title};
use crate::i18n::fluent::I18n;
use crate::ui::ads::{self, AdService};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    FullTime,
    Contract,
    Internship,
}

impl JobKind {
    pub fn label_key(self) -> &'static str {
        match self {
            JobKind::FullTime => "job-type-full-time",
            JobKind::Contract => "job-type-contract",
            JobKind::Internship => "job-type-internship",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub slug: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub kind: JobKind,
    pub posted: NaiveDate,
}

fn posting(
    slug: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    kind: JobKind,
    (year, month, day): (i32, u32, u32),
) -> Option<JobPosting> {
    Some(JobPosting {
        slug,
        title,
        company,
        location,
        kind,
        posted: NaiveDate::from_ymd_opt(year, month, day)?,
    })
}

/// Featured postings, most recently posted first.
pub fn featured_jobs() -> Vec<JobPosting> {
    let mut jobs: Vec<JobPosting> = [
        posting(
            "senior-rust-engineer",
            "Senior Rust Engineer",
            "Ferrous Labs",
            "Remote (EU)",
            JobKind::FullTime,
            (2026, 10, 12),
        ),
        posting(
            "frontend-developer",
            "Frontend Developer",
            "Brightpath",
            "Lyon, FR",
            JobKind::FullTime,
            (2026, 10, 9),
        ),
        posting(
            "data-analyst-intern",
            "Data Analyst Intern",
            "Northwind Analytics",
            "Montréal, CA",
            JobKind::Internship,
            (2026, 10, 15),
        ),
        posting(
            "devops-contractor",
            "DevOps Contractor",
            "Cloudforge",
            "Remote",
            JobKind::Contract,
            (2026, 10, 1),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    jobs.sort_by(|a, b| b.posted.cmp(&a.posted));
    jobs
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub ads: &'a dyn AdService,
    pub compact: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Apply(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Applied { slug: &'static str, title: &'static str },
}

/// Resolves an apply click against the listings; unknown slugs are ignored.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Apply(slug) => featured_jobs()
            .into_iter()
            .find(|job| job.slug == *slug)
            .map_or(Event::None, |job| Event::Applied {
                slug: job.slug,
                title: job.title,
            }),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cards = featured_jobs()
        .into_iter()
        .map(|job| build_card(ctx.i18n, job))
        .collect();

    let content = Column::new()
        .push(page_title(ctx.i18n.tr("jobs-title")))
        .push(Text::new(ctx.i18n.tr("jobs-subtitle")).size(typography::BODY_LG))
        .push(card_grid(cards, ctx.compact))
        .push(ads::placeholder::view(
            ctx.ads,
            ads::slots::JOBS_SIDEBAR,
            ctx.i18n,
        ));

    page_frame(content)
}

fn build_card<'a>(i18n: &I18n, job: JobPosting) -> Element<'a, Message> {
    let posted = i18n.tr_with_args("jobs-posted", &[("date", &format_date(job.posted))]);

    let footer = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(posted).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("jobs-apply-button")).size(typography::BODY))
                .on_press(Message::Apply(job.slug))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary),
        );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(job.title).size(typography::TITLE_SM))
        .push(Text::new(job.company).size(typography::BODY))
        .push(
            Text::new(format!("{} \u{00b7} {}", job.location, i18n.tr(job.kind.label_key())))
                .size(typography::BODY_SM),
        )
        .push(footer);

    Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ads::PlaceholderAdService;

    #[test]
    fn featured_jobs_are_newest_first() {
        let jobs = featured_jobs();
        assert_eq!(jobs.len(), 4);
        assert!(jobs.windows(2).all(|pair| pair[0].posted >= pair[1].posted));
        assert_eq!(jobs[0].slug, "data-analyst-intern");
    }

    #[test]
    fn apply_to_known_job_reports_title() {
        assert_eq!(
            update(&Message::Apply("senior-rust-engineer")),
            Event::Applied {
                slug: "senior-rust-engineer",
                title: "Senior Rust Engineer",
            }
        );
    }

    #[test]
    fn apply_to_unknown_job_is_ignored() {
        assert_eq!(update(&Message::Apply("no-such-job")), Event::None);
    }

    #[test]
    fn view_builds_in_compact_layout() {
        let i18n = I18n::default();
        let ads = PlaceholderAdService::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            ads: &ads,
            compact: true,
        });
    }
}
