// SPDX-License-Identifier: MPL-2.0
//! Swipe directions and the border tone each one resolves to.

use std::fmt;

/// Horizontal direction of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Swiped towards the left edge ("Disliked").
    Left,
    /// Swiped towards the right edge ("Liked").
    Right,
}

impl SwipeDirection {
    /// Border tone shown while this direction's feedback is active.
    #[must_use]
    pub fn tone(self) -> BorderTone {
        match self {
            SwipeDirection::Left => BorderTone::Red,
            SwipeDirection::Right => BorderTone::Green,
        }
    }

    /// Sign of the horizontal slide-out translation (`-1.0` or `1.0`).
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    /// Localization key of the badge label.
    #[must_use]
    pub fn badge_key(self) -> &'static str {
        match self {
            SwipeDirection::Left => "badge-disliked",
            SwipeDirection::Right => "badge-liked",
        }
    }

    /// Lowercase name, as reported to the parent.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback border tone around the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderTone {
    #[default]
    Transparent,
    Red,
    Green,
}

impl BorderTone {
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self == BorderTone::Transparent
    }
}
