// SPDX-License-Identifier: MPL-2.0
//! Container styles for the swipe card.

use crate::domain::swipe::{BorderTone, SwipeDirection};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Color of a feedback border tone, before any transition is applied.
#[must_use]
pub fn tone_color(tone: BorderTone) -> Color {
    match tone {
        BorderTone::Transparent => Color::TRANSPARENT,
        BorderTone::Red => palette::SWIPE_RED,
        BorderTone::Green => palette::SWIPE_GREEN,
    }
}

/// Rounded, shadowed card frame with a colored border.
///
/// `border_color` is the already-interpolated color for the current frame.
pub fn card_frame(border_color: Color, surface: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: border_color,
            width: border::WIDTH_CARD,
            radius: radius::CARD.into(),
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Translucent badge shown above the card while feedback is active.
///
/// Without a direction the badge falls back to the neutral dark backdrop.
pub fn badge(direction: Option<SwipeDirection>) -> impl Fn(&Theme) -> container::Style {
    let base = match direction {
        Some(SwipeDirection::Left) => palette::SWIPE_RED,
        Some(SwipeDirection::Right) => palette::SWIPE_GREEN,
        None => palette::BLACK,
    };

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE,
            ..base
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::BADGE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
