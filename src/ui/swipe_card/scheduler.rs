// SPDX-License-Identifier: MPL-2.0
//! Turns machine commands into Iced tasks.
//!
//! Timers are plain sleeping tasks on the Tokio runtime. They are never
//! aborted: each one carries its cycle token and the machine drops the ones
//! that arrive for a superseded cycle.

use super::Message;
use crate::domain::swipe::{Command, SwipeDirection, SwipeEvent};
use iced::Task;
use std::time::Duration;

/// Commands split into the parent notification and the timers to start.
pub struct Dispatch {
    pub notified: Option<SwipeDirection>,
    pub task: Task<Message>,
}

pub fn dispatch(commands: Vec<Command>) -> Dispatch {
    let mut notified = None;
    let mut timers = Vec::new();

    for command in commands {
        match command {
            Command::Notify(direction) => notified = Some(direction),
            other => {
                if let Some((after, event)) = timer_for(other) {
                    timers.push(delayed(event, after));
                }
            }
        }
    }

    Dispatch {
        notified,
        task: Task::batch(timers),
    }
}

/// Delay and event of a timer command.
fn timer_for(command: Command) -> Option<(Duration, SwipeEvent)> {
    match command {
        Command::ScheduleNotify {
            cycle,
            direction,
            after,
        } => Some((after, SwipeEvent::NotifyDue { cycle, direction })),
        Command::ScheduleReset { cycle, after } => Some((after, SwipeEvent::ResetDue(cycle))),
        Command::Notify(_) => None,
    }
}

fn delayed(event: SwipeEvent, after: Duration) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(after).await;
            event
        },
        Message::Scheduled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::swipe::CycleId;

    #[test]
    fn schedule_notify_becomes_notify_due() {
        let cycle = CycleId::default().next();
        let command = Command::ScheduleNotify {
            cycle,
            direction: SwipeDirection::Right,
            after: Duration::from_millis(500),
        };

        assert_eq!(
            timer_for(command),
            Some((
                Duration::from_millis(500),
                SwipeEvent::NotifyDue {
                    cycle,
                    direction: SwipeDirection::Right
                }
            ))
        );
    }

    #[test]
    fn schedule_reset_becomes_reset_due() {
        let cycle = CycleId::default().next().next();
        let command = Command::ScheduleReset {
            cycle,
            after: Duration::from_millis(250),
        };

        assert_eq!(
            timer_for(command),
            Some((Duration::from_millis(250), SwipeEvent::ResetDue(cycle)))
        );
    }

    #[test]
    fn notify_is_not_a_timer() {
        assert_eq!(timer_for(Command::Notify(SwipeDirection::Left)), None);
    }

    #[test]
    fn dispatch_extracts_notification() {
        let cycle = CycleId::default().next();
        let dispatch = dispatch(vec![
            Command::Notify(SwipeDirection::Left),
            Command::ScheduleReset {
                cycle,
                after: Duration::from_millis(500),
            },
        ]);
        assert_eq!(dispatch.notified, Some(SwipeDirection::Left));
    }

    #[test]
    fn dispatch_without_notify_reports_none() {
        let dispatch = dispatch(Vec::new());
        assert_eq!(dispatch.notified, None);
    }
}
