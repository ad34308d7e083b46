// SPDX-License-Identifier: MPL-2.0
//! `jobsite_ui` is the front end of a job-listing site built with the Iced
//! GUI framework.
//!
//! It renders a header, four static pages, a footer, advertisement
//! placeholders, and a toast notification host whose toasts dismiss
//! themselves after a countdown. Localization uses Fluent and user
//! preferences live in a `settings.toml` file.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
