// SPDX-License-Identifier: MPL-2.0
//! Delays driving a swipe cycle.

use std::time::Duration;

/// Swipe delay bounds, in milliseconds.
pub mod delay_bounds {
    /// Minimum delay (fire on the next update).
    pub const MIN_MS: u64 = 0;
    /// Maximum delay.
    pub const MAX_MS: u64 = 5_000;
    /// Default notify and reset delay.
    pub const DEFAULT_MS: u64 = 500;
}

/// A swipe timer delay, guaranteed to be within 0–5000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SwipeDelay(u64);

impl SwipeDelay {
    /// Creates a delay in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(delay_bounds::MIN_MS, delay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SwipeDelay {
    fn default() -> Self {
        Self(delay_bounds::DEFAULT_MS)
    }
}

/// The two delays of a cycle.
///
/// `notify` is measured from gesture completion. `reset` is measured from the
/// notification, so the parent is always told before the card resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeTiming {
    pub notify: SwipeDelay,
    pub reset: SwipeDelay,
}

impl SwipeTiming {
    #[must_use]
    pub fn new(notify: SwipeDelay, reset: SwipeDelay) -> Self {
        Self { notify, reset }
    }

    /// Time from gesture completion until the card is back to idle.
    #[must_use]
    pub fn cycle_length(self) -> Duration {
        self.notify.as_duration() + self.reset.as_duration()
    }
}
