// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests.
//!
//! Re-exports the `approx` assertion macros for float comparison and
//! provides [`CallCounter`] for checking how often a dismissal callback ran.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts invocations of the callbacks it hands out.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a callback that increments this counter when run.
    pub fn callback(&self) -> impl FnOnce() + Send + 'static {
        let count = Arc::clone(&self.0);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
