// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translations live in
//! `assets/i18n/<locale>.ftl` and are embedded into the binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - `MISSING: <key>` marker for untranslated keys

pub mod fluent;
