// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! Type-safe wrappers that keep toast timing and stacking values inside
//! their valid ranges.

use std::time::Duration;

// =============================================================================
// Dismiss Delay Bounds
// =============================================================================

/// Auto-dismiss delay bounds in milliseconds.
///
/// `MAX_MS` caps values read from settings; durations chosen in code are
/// only held to the lower bound.
pub mod dismiss_delay_bounds {
    /// Shortest countdown. A toast always lives for at least one millisecond.
    pub const MIN_MS: u64 = 1;
    /// Longest countdown accepted from settings (10 minutes).
    pub const MAX_MS: u64 = 600_000;
    /// Countdown used when the caller does not pick one.
    pub const DEFAULT_MS: u64 = 5_000;
}

// =============================================================================
// DismissDelay
// =============================================================================

/// Delay between mounting a toast and its automatic dismissal.
///
/// Always strictly positive. A delay is never shorter than what the caller
/// asked for, except that zero is raised to one millisecond.
///
/// # Example
///
/// ```
/// use jobsite_ui::domain::notifications::DismissDelay;
/// use std::time::Duration;
///
/// assert_eq!(DismissDelay::default().as_millis(), 5_000);
/// assert_eq!(DismissDelay::from_millis(0).as_millis(), 1);
/// assert_eq!(
///     DismissDelay::from_duration(Duration::from_secs(1200)).as_duration(),
///     Duration::from_secs(1200)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DismissDelay(Duration);

impl DismissDelay {
    /// Creates a delay from a settings value in milliseconds, clamping to
    /// [`dismiss_delay_bounds`].
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis.clamp(
            dismiss_delay_bounds::MIN_MS,
            dismiss_delay_bounds::MAX_MS,
        )))
    }

    /// Creates a delay of exactly `duration`, or one millisecond for zero.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        if duration.is_zero() {
            Self(Duration::from_millis(dismiss_delay_bounds::MIN_MS))
        } else {
            Self(duration)
        }
    }

    /// Returns the delay in milliseconds, rounding partial milliseconds up.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX)
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(Duration::from_millis(dismiss_delay_bounds::DEFAULT_MS))
    }
}

impl From<Duration> for DismissDelay {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

// =============================================================================
// Max Visible Bounds
// =============================================================================

/// Bounds for the number of toasts shown at once.
pub mod max_visible_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 10;
    pub const DEFAULT: usize = 3;
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Maximum number of toasts stacked on screen; the rest wait in a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new limit, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_delay_defaults_to_five_seconds() {
        assert_eq!(DismissDelay::default().as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn dismiss_delay_is_never_zero() {
        assert_eq!(DismissDelay::from_millis(0).as_millis(), 1);
        assert_eq!(DismissDelay::from_duration(Duration::ZERO).as_millis(), 1);
    }

    #[test]
    fn settings_delay_clamps_upper_bound() {
        assert_eq!(
            DismissDelay::from_millis(u64::MAX).as_millis(),
            dismiss_delay_bounds::MAX_MS
        );
    }

    #[test]
    fn explicit_duration_is_never_shortened() {
        let twenty_minutes = Duration::from_secs(20 * 60);
        assert_eq!(
            DismissDelay::from_duration(twenty_minutes).as_duration(),
            twenty_minutes
        );

        let sub_milli = Duration::from_micros(1_900);
        let delay = DismissDelay::from_duration(sub_milli);
        assert_eq!(delay.as_duration(), sub_milli);
        assert_eq!(delay.as_millis(), 2);
    }

    #[test]
    fn dismiss_delay_accepts_valid_values() {
        assert_eq!(DismissDelay::from_millis(200).as_millis(), 200);
        assert_eq!(
            DismissDelay::from(Duration::from_millis(1000)).as_millis(),
            1000
        );
    }

    #[test]
    fn max_visible_clamps() {
        assert_eq!(MaxVisible::new(0).value(), max_visible_bounds::MIN);
        assert_eq!(MaxVisible::new(99).value(), max_visible_bounds::MAX);
        assert_eq!(MaxVisible::default().value(), 3);
    }
}
