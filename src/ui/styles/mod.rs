// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for UI components.

pub mod container;

pub use container::{badge, card_frame, tone_color};
