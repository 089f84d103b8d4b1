// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`swipe`]: The swipe card machine ([`SwipeState`](swipe::SwipeState),
//!   [`SwipeDirection`](swipe::SwipeDirection), [`CycleId`](swipe::CycleId),
//!   [`SwipeTiming`](swipe::SwipeTiming))
//! - [`ui`]: UI value objects ([`SlideDistance`](ui::newtypes::SlideDistance),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold))

pub mod swipe;
pub mod ui;
