// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// Colors of the host surface around the card.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Card fill shown behind letterboxed images.
    pub card_surface: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            card_surface: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            card_surface: palette::WHITE,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The built-in Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
