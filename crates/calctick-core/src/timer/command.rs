//! Input commands for the time tracker.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::tracker::{TimeTracker, TimerMode};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum TimerCommand {
    Start,
    Pause,
    Reset,
    SelectMode(TimerMode),
    SetMinutes(u32),
    SetSeconds(u32),
}

impl<C: Clock> TimeTracker<C> {
    /// Apply one input command, returning the event it produced, if any.
    pub fn apply(&mut self, command: TimerCommand) -> Option<Event> {
        match command {
            TimerCommand::Start => self.start(),
            TimerCommand::Pause => self.pause(),
            TimerCommand::Reset => self.reset(),
            TimerCommand::SelectMode(mode) => self.set_mode(mode),
            TimerCommand::SetMinutes(minutes) => self.set_minutes(minutes),
            TimerCommand::SetSeconds(seconds) => self.set_seconds(seconds),
        }
    }
}
