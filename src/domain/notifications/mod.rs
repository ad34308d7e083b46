// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`DismissDelay`]: Auto-dismiss countdown for a toast
//! - [`MaxVisible`]: How many toasts the host stacks at once

mod newtypes;

pub use newtypes::{dismiss_delay_bounds, max_visible_bounds, DismissDelay, MaxVisible};
