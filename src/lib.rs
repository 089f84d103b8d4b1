// SPDX-License-Identifier: MPL-2.0
//! `swipe_card` is a swipeable image card built with the Iced GUI framework.
//!
//! Swiping the card right marks the image as liked, left as disliked. The card
//! answers with a colored border, a badge and a slide-out animation, notifies
//! its parent of the direction, then resets. A small host application judges a
//! deck of images with it.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
