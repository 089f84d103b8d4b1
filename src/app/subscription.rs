// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The whole window is the swipe surface: pointer and touch input always
//! reaches the card, keyboard input only when no widget captured it.

use super::Message;
use crate::ui::design_tokens::motion;
use crate::ui::swipe_card;
use iced::{event, time, Event, Subscription};

/// Forwards raw input events to the swipe card.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(event, status))
}

/// Emits animation frames while a card transition is running.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(motion::FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn route_event(event: Event, status: event::Status) -> Option<Message> {
    let forward = match &event {
        Event::Mouse(_) | Event::Touch(_) => true,
        Event::Keyboard(_) => status == event::Status::Ignored,
        _ => false,
    };

    forward.then(|| Message::SwipeCard(swipe_card::Message::RawEvent(event)))
}
