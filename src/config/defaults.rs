// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe timing**: Notify and reset delays of a swipe cycle
//! - **Swipe motion**: Slide-out distance and gesture threshold
//! - **Window**: Default and minimum window size

// ==========================================================================
// Swipe Timing Defaults
// ==========================================================================

/// Delay between gesture completion and the parent notification (ms).
pub const DEFAULT_NOTIFY_DELAY_MS: u64 = 500;

/// Delay between the parent notification and the visual reset (ms).
pub const DEFAULT_RESET_DELAY_MS: u64 = 500;

/// Minimum swipe delay (ms).
pub const MIN_SWIPE_DELAY_MS: u64 = 0;

/// Maximum swipe delay (ms).
pub const MAX_SWIPE_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Swipe Motion Defaults
// ==========================================================================

/// Horizontal slide-out distance while swiped (px).
pub const DEFAULT_SLIDE_DISTANCE: f32 = 500.0;

/// Minimum horizontal travel for a drag to count as a swipe (px).
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 10.0;

/// Duration of the slide-out transform transition (ms).
pub const SLIDE_TRANSITION_MS: u64 = 1_000;

/// Duration of the border color transition (ms).
pub const BORDER_TRANSITION_MS: u64 = 500;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;
