// SPDX-License-Identifier: MPL-2.0
//! The swipe card state machine.
//!
//! [`transition`] is a pure function: it takes the current [`SwipeState`] and
//! one [`SwipeEvent`] and returns the next state together with the
//! [`Command`]s the caller must carry out (schedule a timer, notify the
//! parent). Nothing in here touches a clock or a runtime.
//!
//! # Cycle
//!
//! ```text
//! Idle --GestureCompleted(d)--> Feedback(d, #n)   schedule NotifyDue(#n) after `notify`
//! Feedback --NotifyDue(#n)---> Feedback           Notify(d), schedule ResetDue(#n) after `reset`
//! Feedback --ResetDue(#n)----> Idle
//! ```
//!
//! A gesture arriving during `Feedback` opens cycle `#n+1`; the pending
//! `ResetDue(#n)` no longer matches the current cycle and is dropped.

use super::cycle::CycleId;
use super::direction::{BorderTone, SwipeDirection};
use super::timing::SwipeTiming;
use std::time::Duration;

/// Coarse phase of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Feedback,
}

/// Active feedback of the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub direction: SwipeDirection,
    pub cycle: CycleId,
}

/// Transient presentation state of one card.
///
/// Direction, swiped flag and border tone are all derived from the single
/// `feedback` field, so they can only change together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwipeState {
    feedback: Option<Feedback>,
    last_cycle: CycleId,
    /// Cycles whose notification has been scheduled but not yet delivered.
    awaiting_notify: Vec<CycleId>,
}

/// Inputs of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeEvent {
    /// The gesture detector resolved a horizontal swipe.
    GestureCompleted(SwipeDirection),
    /// The notify timer of `cycle` elapsed.
    NotifyDue {
        cycle: CycleId,
        direction: SwipeDirection,
    },
    /// The reset timer of `cycle` elapsed.
    ResetDue(CycleId),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deliver `SwipeEvent::NotifyDue` after `after`.
    ScheduleNotify {
        cycle: CycleId,
        direction: SwipeDirection,
        after: Duration,
    },
    /// Deliver `SwipeEvent::ResetDue` after `after`.
    ScheduleReset { cycle: CycleId, after: Duration },
    /// Tell the parent which direction was swiped.
    Notify(SwipeDirection),
}

/// What a transition did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new cycle started, possibly replacing one still in feedback.
    Entered {
        cycle: CycleId,
        superseded: Option<CycleId>,
    },
    /// A cycle's notification fired. `stale` is set when a newer cycle has
    /// already replaced it on screen.
    Notified { cycle: CycleId, stale: bool },
    /// The card went back to idle.
    Reset(CycleId),
    /// The event was a duplicate or belonged to a superseded cycle.
    Ignored,
}

/// Result of [`transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SwipeState,
    pub commands: Vec<Command>,
    pub outcome: Outcome,
}

impl SwipeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.feedback.is_some() {
            Phase::Feedback
        } else {
            Phase::Idle
        }
    }

    /// Direction of the active feedback, `None` when idle.
    #[must_use]
    pub fn direction(&self) -> Option<SwipeDirection> {
        self.feedback.map(|f| f.direction)
    }

    /// Whether the slide-out is active.
    #[must_use]
    pub fn is_swiped(&self) -> bool {
        self.feedback.is_some()
    }

    #[must_use]
    pub fn border_tone(&self) -> BorderTone {
        self.direction()
            .map_or(BorderTone::Transparent, SwipeDirection::tone)
    }

    /// Cycle currently on screen.
    #[must_use]
    pub fn current_cycle(&self) -> Option<CycleId> {
        self.feedback.map(|f| f.cycle)
    }

    /// Most recently allocated cycle, whether or not it is still on screen.
    #[must_use]
    pub fn last_cycle(&self) -> CycleId {
        self.last_cycle
    }

    /// Whether a notification for `cycle` is still outstanding.
    #[must_use]
    pub fn is_awaiting_notify(&self, cycle: CycleId) -> bool {
        self.awaiting_notify.contains(&cycle)
    }

    /// Applies `event` and returns the resulting transition.
    #[must_use]
    pub fn apply(&self, event: SwipeEvent, timing: SwipeTiming) -> Transition {
        transition(self, event, timing)
    }
}

/// Computes the next state for `event`.
#[must_use]
pub fn transition(state: &SwipeState, event: SwipeEvent, timing: SwipeTiming) -> Transition {
    match event {
        SwipeEvent::GestureCompleted(direction) => {
            let cycle = state.last_cycle.next();
            let mut awaiting_notify = state.awaiting_notify.clone();
            awaiting_notify.push(cycle);

            Transition {
                state: SwipeState {
                    feedback: Some(Feedback { direction, cycle }),
                    last_cycle: cycle,
                    awaiting_notify,
                },
                commands: vec![Command::ScheduleNotify {
                    cycle,
                    direction,
                    after: timing.notify.as_duration(),
                }],
                outcome: Outcome::Entered {
                    cycle,
                    superseded: state.current_cycle(),
                },
            }
        }
        SwipeEvent::NotifyDue { cycle, direction } => {
            let Some(position) = state.awaiting_notify.iter().position(|c| *c == cycle) else {
                return ignored(state);
            };

            let mut next = state.clone();
            next.awaiting_notify.remove(position);

            let is_current = state.current_cycle() == Some(cycle);
            let mut commands = vec![Command::Notify(direction)];
            if is_current {
                commands.push(Command::ScheduleReset {
                    cycle,
                    after: timing.reset.as_duration(),
                });
            }

            Transition {
                state: next,
                commands,
                outcome: Outcome::Notified {
                    cycle,
                    stale: !is_current,
                },
            }
        }
        SwipeEvent::ResetDue(cycle) => {
            if state.current_cycle() != Some(cycle) {
                return ignored(state);
            }

            Transition {
                state: SwipeState {
                    feedback: None,
                    ..state.clone()
                },
                commands: Vec::new(),
                outcome: Outcome::Reset(cycle),
            }
        }
    }
}

fn ignored(state: &SwipeState) -> Transition {
    Transition {
        state: state.clone(),
        commands: Vec::new(),
        outcome: Outcome::Ignored,
    }
}
