// SPDX-License-Identifier: MPL-2.0
//! Gesture detection for the swipe card.
//!
//! Detectors consume raw window events and report a [`SwipeDirection`] once a
//! horizontal drag is released. The card only depends on the
//! [`GestureDetector`] trait, so hosts can plug in their own input source.

use crate::domain::swipe::SwipeDirection;
use crate::domain::ui::SwipeThreshold;
use iced::keyboard::{self, key};
use iced::mouse;
use iced::touch;
use iced::{Event, Point};
use std::fmt;

/// Turns raw input into completed swipe gestures.
pub trait GestureDetector: fmt::Debug + Send {
    /// Feeds one event. Returns a direction when a gesture completes.
    fn process(&mut self, event: &Event) -> Option<SwipeDirection>;

    /// Drops any gesture in progress.
    fn reset(&mut self) {}
}

/// A single press-move-release stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stroke {
    start: Point,
    current: Point,
}

impl Stroke {
    fn new(position: Point) -> Self {
        Self {
            start: position,
            current: position,
        }
    }

    /// Direction of a finished stroke, if it is mostly horizontal and long enough.
    fn resolve(self, threshold: SwipeThreshold) -> Option<SwipeDirection> {
        let dx = self.current.x - self.start.x;
        let dy = self.current.y - self.start.y;

        if dx.abs() < threshold.value() || dx.abs() <= dy.abs() {
            return None;
        }

        Some(if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    }
}

/// Mouse drag and single-finger touch swipes.
#[derive(Debug, Clone)]
pub struct PointerSwipe {
    threshold: SwipeThreshold,
    cursor: Option<Point>,
    mouse: Option<Stroke>,
    finger: Option<(touch::Finger, Stroke)>,
}

impl PointerSwipe {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            cursor: None,
            mouse: None,
            finger: None,
        }
    }

    fn process_mouse(&mut self, event: &mouse::Event) -> Option<SwipeDirection> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(*position);
                if let Some(stroke) = self.mouse.as_mut() {
                    stroke.current = *position;
                }
                None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                self.mouse = self.cursor.map(Stroke::new);
                None
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.mouse.take()?.resolve(self.threshold)
            }
            _ => None,
        }
    }

    fn process_touch(&mut self, event: &touch::Event) -> Option<SwipeDirection> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if self.finger.is_none() {
                    self.finger = Some((id, Stroke::new(position)));
                }
                None
            }
            touch::Event::FingerMoved { id, position } => {
                if let Some((tracked, stroke)) = self.finger.as_mut() {
                    if *tracked == id {
                        stroke.current = position;
                    }
                }
                None
            }
            touch::Event::FingerLifted { id, position } => match self.finger {
                Some((tracked, mut stroke)) if tracked == id => {
                    self.finger = None;
                    stroke.current = position;
                    stroke.resolve(self.threshold)
                }
                _ => None,
            },
            touch::Event::FingerLost { id, .. } => {
                if matches!(self.finger, Some((tracked, _)) if tracked == id) {
                    self.finger = None;
                }
                None
            }
        }
    }
}

impl GestureDetector for PointerSwipe {
    fn process(&mut self, event: &Event) -> Option<SwipeDirection> {
        match event {
            Event::Mouse(mouse_event) => self.process_mouse(mouse_event),
            Event::Touch(touch_event) => self.process_touch(touch_event),
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.mouse = None;
        self.finger = None;
    }
}

/// Arrow keys as swipes: `←` dislikes, `→` likes.
///
/// Only the initial press counts. Auto-repeats of a held key are dropped, so
/// holding `→` is still one swipe.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardSwipe;

impl GestureDetector for KeyboardSwipe {
    fn process(&mut self, event: &Event) -> Option<SwipeDirection> {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key, repeat: false, ..
            }) => key_direction(key),
            _ => None,
        }
    }
}

fn key_direction(key: &keyboard::Key) -> Option<SwipeDirection> {
    match key {
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(SwipeDirection::Left),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(SwipeDirection::Right),
        _ => None,
    }
}

/// Several detectors fed with the same events. The first to resolve wins.
#[derive(Debug, Default)]
pub struct GestureSet {
    detectors: Vec<Box<dyn GestureDetector>>,
}

impl GestureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer and keyboard swipes.
    #[must_use]
    pub fn standard(threshold: SwipeThreshold) -> Self {
        Self::new()
            .with(PointerSwipe::new(threshold))
            .with(KeyboardSwipe)
    }

    #[must_use]
    pub fn with(mut self, detector: impl GestureDetector + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl GestureDetector for GestureSet {
    fn process(&mut self, event: &Event) -> Option<SwipeDirection> {
        // Every detector sees every event so their strokes stay consistent.
        let mut resolved = None;
        for detector in &mut self.detectors {
            if let Some(direction) = detector.process(event) {
                resolved.get_or_insert(direction);
            }
        }
        resolved
    }

    fn reset(&mut self) {
        for detector in &mut self.detectors {
            detector.reset();
        }
    }
}
