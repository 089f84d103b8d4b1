// SPDX-License-Identifier: MPL-2.0
//! Swipe card domain: directions, cycle tokens, timing and the pure state
//! machine. Framework-independent.

pub mod cycle;
pub mod direction;
pub mod machine;
pub mod source;
pub mod timing;

pub use cycle::CycleId;
pub use direction::{BorderTone, SwipeDirection};
pub use machine::{
    transition, Command, Feedback, Outcome, Phase, SwipeEvent, SwipeState, Transition,
};
pub use source::ImageSource;
pub use timing::{SwipeDelay, SwipeTiming};
