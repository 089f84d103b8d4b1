// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Slide Distance
// =============================================================================

/// Slide-out distance bounds, in logical pixels.
pub mod slide_bounds {
    pub const MIN_PX: f32 = 0.0;
    pub const MAX_PX: f32 = 2000.0;
    pub const DEFAULT_PX: f32 = 500.0;
}

/// How far the card travels off-frame while swiped, guaranteed to be within
/// 0–2000 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideDistance(f32);

impl SlideDistance {
    /// Creates a new slide distance, clamping the value to the valid range.
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(slide_bounds::MIN_PX, slide_bounds::MAX_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SlideDistance {
    fn default() -> Self {
        Self(slide_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// Swipe Threshold
// =============================================================================

/// Gesture threshold bounds, in logical pixels.
pub mod threshold_bounds {
    pub const MIN_PX: f32 = 1.0;
    pub const MAX_PX: f32 = 200.0;
    pub const DEFAULT_PX: f32 = 10.0;
}

/// Minimum horizontal travel for a drag-release to count as a swipe,
/// guaranteed to be within 1–200 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(threshold_bounds::MIN_PX, threshold_bounds::MAX_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT_PX)
    }
}
