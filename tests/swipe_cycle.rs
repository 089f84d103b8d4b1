// SPDX-License-Identifier: MPL-2.0
//! Swipe cycle scenarios driven by a virtual clock.
//!
//! Timer commands are queued with their due time instead of sleeping, so the
//! exact notify and reset instants can be asserted.

use std::collections::BTreeMap;
use std::time::Duration;
use swipe_card::domain::swipe::{
    BorderTone, Command, Phase, SwipeDelay, SwipeDirection, SwipeEvent, SwipeState, SwipeTiming,
};

type Snapshot = (Phase, Option<SwipeDirection>, bool, BorderTone);

/// Drives a `SwipeState` through scheduled events on a millisecond clock.
struct VirtualClock {
    now: u64,
    seq: u64,
    state: SwipeState,
    timing: SwipeTiming,
    pending: BTreeMap<(u64, u64), SwipeEvent>,
    notifications: Vec<(u64, SwipeDirection)>,
}

impl VirtualClock {
    fn new(timing: SwipeTiming) -> Self {
        Self {
            now: 0,
            seq: 0,
            state: SwipeState::new(),
            timing,
            pending: BTreeMap::new(),
            notifications: Vec::new(),
        }
    }

    fn with_default_timing() -> Self {
        Self::new(SwipeTiming::default())
    }

    fn apply(&mut self, event: SwipeEvent) {
        let transition = self.state.apply(event, self.timing);
        self.state = transition.state;

        for command in transition.commands {
            match command {
                Command::ScheduleNotify {
                    cycle,
                    direction,
                    after,
                } => self.schedule(after, SwipeEvent::NotifyDue { cycle, direction }),
                Command::ScheduleReset { cycle, after } => {
                    self.schedule(after, SwipeEvent::ResetDue(cycle));
                }
                Command::Notify(direction) => self.notifications.push((self.now, direction)),
            }
        }
    }

    fn schedule(&mut self, after: Duration, event: SwipeEvent) {
        let due = self.now + u64::try_from(after.as_millis()).expect("delay fits in u64");
        self.seq += 1;
        self.pending.insert((due, self.seq), event);
    }

    fn swipe(&mut self, direction: SwipeDirection) {
        self.apply(SwipeEvent::GestureCompleted(direction));
    }

    /// Fires every timer due up to and including `target`.
    fn advance_to(&mut self, target: u64) {
        while let Some((&(due, seq), _)) = self.pending.iter().next() {
            if due > target {
                break;
            }
            let event = self
                .pending
                .remove(&(due, seq))
                .expect("pending event present");
            self.now = due;
            self.apply(event);
        }
        self.now = target;
    }

    fn snapshot(&self) -> Snapshot {
        (
            self.state.phase(),
            self.state.direction(),
            self.state.is_swiped(),
            self.state.border_tone(),
        )
    }

    /// Swipes at the current instant and samples the state at each offset.
    /// Returns the samples plus the notifications, both relative to the gesture.
    fn observe_cycle(
        &mut self,
        direction: SwipeDirection,
        offsets: &[u64],
    ) -> (Vec<(u64, Snapshot)>, Vec<(u64, SwipeDirection)>) {
        let start = self.now;
        let already_notified = self.notifications.len();
        self.swipe(direction);

        let samples = offsets
            .iter()
            .map(|&offset| {
                self.advance_to(start + offset);
                (offset, self.snapshot())
            })
            .collect();
        let notifications = self.notifications[already_notified..]
            .iter()
            .map(|&(at, direction)| (at - start, direction))
            .collect();

        (samples, notifications)
    }

    fn assert_reset(&self) {
        assert_eq!(self.state.phase(), Phase::Idle);
        assert_eq!(self.state.direction(), None);
        assert!(!self.state.is_swiped());
        assert_eq!(self.state.border_tone(), BorderTone::Transparent);
    }

    fn assert_feedback(&self, direction: SwipeDirection) {
        assert_eq!(self.state.phase(), Phase::Feedback);
        assert_eq!(self.state.direction(), Some(direction));
        assert!(self.state.is_swiped());
        assert_eq!(self.state.border_tone(), direction.tone());
    }
}

#[test]
fn right_swipe_notifies_at_500_and_resets_at_1000() {
    let mut clock = VirtualClock::with_default_timing();
    clock.swipe(SwipeDirection::Right);

    clock.assert_feedback(SwipeDirection::Right);
    assert_eq!(clock.state.border_tone(), BorderTone::Green);

    clock.advance_to(499);
    assert!(clock.notifications.is_empty());
    clock.assert_feedback(SwipeDirection::Right);

    clock.advance_to(500);
    assert_eq!(clock.notifications, vec![(500, SwipeDirection::Right)]);
    clock.assert_feedback(SwipeDirection::Right);

    clock.advance_to(999);
    clock.assert_feedback(SwipeDirection::Right);

    clock.advance_to(1000);
    clock.assert_reset();
    assert_eq!(clock.notifications.len(), 1);
}

#[test]
fn left_swipe_notifies_at_500_and_resets_at_1000() {
    let mut clock = VirtualClock::with_default_timing();
    clock.swipe(SwipeDirection::Left);

    clock.assert_feedback(SwipeDirection::Left);
    assert_eq!(clock.state.border_tone(), BorderTone::Red);

    clock.advance_to(500);
    assert_eq!(clock.notifications, vec![(500, SwipeDirection::Left)]);

    clock.advance_to(1000);
    clock.assert_reset();
}

#[test]
fn notification_always_precedes_reset() {
    // Reset shorter than notify must still come after it.
    let timing = SwipeTiming::new(SwipeDelay::from_millis(800), SwipeDelay::from_millis(100));
    let mut clock = VirtualClock::new(timing);
    clock.swipe(SwipeDirection::Right);

    clock.advance_to(799);
    clock.assert_feedback(SwipeDirection::Right);

    clock.advance_to(800);
    assert_eq!(clock.notifications, vec![(800, SwipeDirection::Right)]);
    clock.assert_feedback(SwipeDirection::Right);

    clock.advance_to(900);
    clock.assert_reset();
}

#[test]
fn zero_delays_still_notify_then_reset() {
    let timing = SwipeTiming::new(SwipeDelay::from_millis(0), SwipeDelay::from_millis(0));
    let mut clock = VirtualClock::new(timing);
    clock.swipe(SwipeDirection::Left);
    clock.assert_feedback(SwipeDirection::Left);

    clock.advance_to(0);
    assert_eq!(clock.notifications, vec![(0, SwipeDirection::Left)]);
    clock.assert_reset();
}

#[test]
fn second_gesture_cancels_first_reset() {
    let mut clock = VirtualClock::with_default_timing();
    clock.swipe(SwipeDirection::Right);

    clock.advance_to(700);
    assert_eq!(clock.notifications, vec![(500, SwipeDirection::Right)]);
    clock.swipe(SwipeDirection::Left);
    clock.assert_feedback(SwipeDirection::Left);

    // The first cycle's reset (due at 1000) must not clobber the new feedback.
    clock.advance_to(1000);
    clock.assert_feedback(SwipeDirection::Left);

    clock.advance_to(1200);
    assert_eq!(
        clock.notifications,
        vec![(500, SwipeDirection::Right), (1200, SwipeDirection::Left)]
    );
    clock.assert_feedback(SwipeDirection::Left);

    clock.advance_to(1700);
    clock.assert_reset();
}

#[test]
fn rapid_gestures_each_notify_once() {
    let mut clock = VirtualClock::with_default_timing();
    clock.swipe(SwipeDirection::Right);
    clock.advance_to(100);
    clock.swipe(SwipeDirection::Left);

    clock.advance_to(5000);

    assert_eq!(
        clock.notifications,
        vec![(500, SwipeDirection::Right), (600, SwipeDirection::Left)]
    );
    clock.assert_reset();
}

#[test]
fn duplicate_timer_delivery_does_not_double_fire() {
    let mut clock = VirtualClock::with_default_timing();
    clock.swipe(SwipeDirection::Right);
    let cycle = clock.state.current_cycle().expect("cycle in feedback");

    clock.advance_to(500);
    clock.apply(SwipeEvent::NotifyDue {
        cycle,
        direction: SwipeDirection::Right,
    });

    assert_eq!(clock.notifications.len(), 1);
}

#[test]
fn reset_is_idempotent() {
    let mut clock = VirtualClock::with_default_timing();
    clock.swipe(SwipeDirection::Left);
    let cycle = clock.state.current_cycle().expect("cycle in feedback");

    clock.advance_to(1000);
    clock.assert_reset();

    clock.apply(SwipeEvent::ResetDue(cycle));
    clock.assert_reset();
    assert!(clock.pending.is_empty());
}

#[test]
fn card_can_be_swiped_again_after_reset() {
    let mut clock = VirtualClock::with_default_timing();
    clock.swipe(SwipeDirection::Left);
    clock.advance_to(1000);
    clock.assert_reset();

    clock.swipe(SwipeDirection::Right);
    clock.advance_to(2000);

    assert_eq!(
        clock.notifications,
        vec![(500, SwipeDirection::Left), (1500, SwipeDirection::Right)]
    );
    clock.assert_reset();
}

#[test]
fn same_direction_twice_repeats_identical_transitions() {
    const OFFSETS: [u64; 6] = [0, 499, 500, 999, 1000, 1500];
    let mut clock = VirtualClock::with_default_timing();

    let first = clock.observe_cycle(SwipeDirection::Right, &OFFSETS);
    clock.assert_reset();
    assert!(clock.pending.is_empty(), "first cycle fully settled");

    let second = clock.observe_cycle(SwipeDirection::Right, &OFFSETS);
    clock.assert_reset();

    assert_eq!(first, second);
    assert_eq!(first.1, vec![(500, SwipeDirection::Right)]);

    let feedback = (
        Phase::Feedback,
        Some(SwipeDirection::Right),
        true,
        BorderTone::Green,
    );
    let idle = (Phase::Idle, None, false, BorderTone::Transparent);
    assert_eq!(
        first.0,
        vec![
            (0, feedback),
            (499, feedback),
            (500, feedback),
            (999, feedback),
            (1000, idle),
            (1500, idle),
        ]
    );
}
