// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the card and its host window, following the W3C Design
Tokens standard.

## Organization

- **Palette**: Base colors, including the swipe feedback colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Window layout gaps (8px grid)
- **Sizing**: Card and badge sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Transition durations

## Examples

```
use swipe_card::ui::design_tokens::{opacity, palette, sizing};
use iced::Color;

// Badge background for a "liked" swipe
let liked = Color {
    a: opacity::BADGE,
    ..palette::SWIPE_GREEN
};

let card_width = sizing::CARD_WIDTH; // 400px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Swipe feedback
    pub const SWIPE_RED: Color = Color::from_rgb(1.0, 0.0, 0.0); // Disliked
    pub const SWIPE_GREEN: Color = Color::from_rgb(0.0, 1.0, 0.0); // Liked
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Badge background, shared by the neutral and directional variants.
    pub const BADGE: f32 = 0.7;

    /// Card drop shadow.
    pub const CARD_SHADOW: f32 = 0.2;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    /// Gap between the status line, the card and the hints.
    pub const MD: f32 = 16.0; // 2 units
    /// Window content padding.
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Card frame
    pub const CARD_WIDTH: f32 = 400.0;
    pub const CARD_HEIGHT: f32 = 500.0;

    // Badge
    /// Height reserved above the card so the badge never shifts the card.
    pub const BADGE_SLOT_HEIGHT: f32 = 55.0;
    pub const BADGE_PADDING_VERTICAL: f32 = 5.0;
    pub const BADGE_PADDING_HORIZONTAL: f32 = 15.0;

    /// Left inset of the card inside the window content.
    pub const CARD_INSET_LEFT: f32 = 30.0;
    pub const CARD_INSET_BOTTOM: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Badge label ("Liked" / "Disliked")
    pub const BADGE: f32 = 32.0;

    /// Standard body - status line, hints
    pub const BODY: f32 = 14.0;

    /// Caption - secondary hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card frame, colored during swipe feedback
    pub const WIDTH_CARD: f32 = 5.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const BADGE: f32 = 10.0;
    pub const CARD: f32 = 40.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::CARD_SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use crate::config::{BORDER_TRANSITION_MS, SLIDE_TRANSITION_MS};
    use std::time::Duration;

    /// Slide-out of the card frame.
    pub const SLIDE: Duration = Duration::from_millis(SLIDE_TRANSITION_MS);

    /// Border color fade.
    pub const BORDER: Duration = Duration::from_millis(BORDER_TRANSITION_MS);

    /// Redraw period while a transition is running.
    pub const FRAME: Duration = Duration::from_millis(16);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::BADGE > 0.0 && opacity::BADGE < 1.0);
    assert!(opacity::CARD_SHADOW < opacity::BADGE);

    // Sizing validation
    assert!(sizing::CARD_HEIGHT > sizing::CARD_WIDTH);
    assert!(radius::CARD * 2.0 < sizing::CARD_WIDTH);

    // Typography validation
    assert!(typography::BADGE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_CARD > 0.0);

    // Color validation
    assert!(palette::SWIPE_RED.r == 1.0 && palette::SWIPE_RED.g == 0.0);
    assert!(palette::SWIPE_GREEN.g == 1.0 && palette::SWIPE_GREEN.r == 0.0);
};
