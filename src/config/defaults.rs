// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast countdown and stacking
//! - **Diagnostics**: Event buffer sizing
//! - **Ads**: Placeholder slot defaults

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::notifications::{dismiss_delay_bounds, max_visible_bounds};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss countdown for toasts (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = dismiss_delay_bounds::DEFAULT_MS;

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = max_visible_bounds::DEFAULT;

/// Interval of the tick subscription that drives toast countdowns.
pub const TOAST_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostic event buffer capacity.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Ad Defaults
// ==========================================================================

/// Ads are off unless the site owner enables them.
pub const DEFAULT_ADS_ENABLED: bool = false;
