// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`swipe_card`] - The swipeable image card component
//! - [`widgets`] - Custom Iced widgets (translate wrapper)
//! - [`styles`] - Centralized container styles
//! - [`design_tokens`] - Design system constants (colors, sizing, motion)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod swipe_card;
pub mod theming;
pub mod widgets;
