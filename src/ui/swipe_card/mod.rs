// SPDX-License-Identifier: MPL-2.0
//! Swipeable image card.
//!
//! The card shows one image in a rounded frame. When a horizontal swipe
//! completes it tints its border (red for left, green for right), shows a
//! "Liked"/"Disliked" badge, slides off-frame, tells the parent which way it
//! was swiped, then returns to rest.
//!
//! Cycle bookkeeping lives in [`crate::domain::swipe`]; this module wires it to
//! Iced events, timers and animations.
//!
//! # Example
//!
//! ```ignore
//! let (effect, task) = card.handle(swipe_card::Message::RawEvent(event));
//! if let swipe_card::Effect::Swiped(direction) = effect {
//!     deck.record(direction);
//! }
//! ```

pub mod animation;
pub mod gesture;
pub mod scheduler;
mod view;

pub use gesture::{GestureDetector, GestureSet, KeyboardSwipe, PointerSwipe};
pub use view::ViewContext;

use crate::config::SwipeConfig;
use crate::domain::swipe::{
    BorderTone, Outcome, Phase, SwipeDirection, SwipeEvent, SwipeState, SwipeTiming, Transition,
};
use crate::domain::ui::SlideDistance;
use crate::ui::design_tokens::motion;
use crate::ui::styles::tone_color;
use animation::Tween;
use iced::time::Instant;
use iced::{Color, Event, Task};

/// Messages handled by the card.
#[derive(Debug, Clone)]
pub enum Message {
    /// Window input forwarded by the host's event subscription.
    RawEvent(Event),
    /// A gesture resolved outside the card's own detectors.
    GestureCompleted(SwipeDirection),
    /// A notify or reset timer elapsed.
    Scheduled(SwipeEvent),
    /// Animation frame.
    Tick(Instant),
}

/// Effects the parent must react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The card was swiped in this direction. Emitted once per cycle, after
    /// the notify delay.
    Swiped(SwipeDirection),
}

#[derive(Debug)]
pub struct State {
    machine: SwipeState,
    timing: SwipeTiming,
    slide_distance: SlideDistance,
    gestures: Box<dyn GestureDetector>,
    offset: Tween<f32>,
    border: Tween<Color>,
}

impl State {
    #[must_use]
    pub fn new(
        timing: SwipeTiming,
        slide_distance: SlideDistance,
        gestures: impl GestureDetector + 'static,
    ) -> Self {
        let now = Instant::now();
        Self {
            machine: SwipeState::new(),
            timing,
            slide_distance,
            gestures: Box::new(gestures),
            offset: Tween::settled(0.0, motion::SLIDE, now),
            border: Tween::settled(tone_color(BorderTone::Transparent), motion::BORDER, now),
        }
    }

    /// Card using the configured timing and motion, with pointer and keyboard swipes.
    #[must_use]
    pub fn from_config(config: &SwipeConfig) -> Self {
        Self::new(
            config.timing(),
            config.slide_distance(),
            GestureSet::standard(config.threshold()),
        )
    }

    pub fn handle(&mut self, message: Message) -> (Effect, Task<Message>) {
        self.handle_at(message, Instant::now())
    }

    /// Same as [`State::handle`] with an explicit clock reading.
    pub fn handle_at(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::RawEvent(event) => match self.gestures.process(&event) {
                Some(direction) => self.apply(SwipeEvent::GestureCompleted(direction), now),
                None => (Effect::None, Task::none()),
            },
            Message::GestureCompleted(direction) => {
                self.apply(SwipeEvent::GestureCompleted(direction), now)
            }
            Message::Scheduled(event) => self.apply(event, now),
            // Redraw only; the view samples the tweens.
            Message::Tick(_) => (Effect::None, Task::none()),
        }
    }

    fn apply(&mut self, event: SwipeEvent, now: Instant) -> (Effect, Task<Message>) {
        let Transition {
            state,
            commands,
            outcome,
        } = self.machine.apply(event, self.timing);

        match outcome {
            Outcome::Entered { cycle, superseded } => {
                // A stroke still in progress must not resolve into a second cycle.
                self.gestures.reset();
                tracing::debug!(
                    %cycle,
                    direction = %state.direction().map_or("none", SwipeDirection::as_str),
                    superseded = ?superseded,
                    "swipe cycle entered"
                );
            }
            Outcome::Notified { cycle, stale } => {
                tracing::debug!(%cycle, stale, "swipe notified");
            }
            Outcome::Reset(cycle) => tracing::debug!(%cycle, "swipe card reset"),
            Outcome::Ignored => tracing::trace!(?event, "swipe event ignored"),
        }

        self.machine = state;
        self.sync_visuals(now);

        let dispatch = scheduler::dispatch(commands);
        let effect = dispatch.notified.map_or(Effect::None, Effect::Swiped);
        (effect, dispatch.task)
    }

    fn sync_visuals(&mut self, now: Instant) {
        let target_offset = self
            .machine
            .direction()
            .map_or(0.0, |direction| direction.sign() * self.slide_distance.value());
        self.offset.retarget(target_offset, now);
        self.border
            .retarget(tone_color(self.machine.border_tone()), now);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    #[must_use]
    pub fn direction(&self) -> Option<SwipeDirection> {
        self.machine.direction()
    }

    #[must_use]
    pub fn is_swiped(&self) -> bool {
        self.machine.is_swiped()
    }

    #[must_use]
    pub fn border_tone(&self) -> BorderTone {
        self.machine.border_tone()
    }

    #[must_use]
    pub fn machine(&self) -> &SwipeState {
        &self.machine
    }

    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        self.offset.value(now)
    }

    #[must_use]
    pub fn border_color_at(&self, now: Instant) -> Color {
        self.border.value(now)
    }

    /// Whether a transition still needs animation frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.offset.is_running(now) || self.border.is_running(now)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(&SwipeConfig::default())
    }
}
