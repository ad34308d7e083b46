// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: a
//! `ViewContext` carries borrowed state into `view`, and interactive
//! components turn their `Message` into an `Event` for the application.
//!
//! # Layout
//!
//! - [`header`] - Brand, navigation links, compact hamburger menu
//! - [`pages`] - Home, Jobs, Blog, and About bodies
//! - [`footer`] - Link columns and copyright line
//! - [`notifications`] - Self-dismissing toast notifications
//! - [`ads`] - Advertisement placeholders and the ad service seam
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod ads;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod notifications;
pub mod pages;
pub mod styles;
pub mod theming;
