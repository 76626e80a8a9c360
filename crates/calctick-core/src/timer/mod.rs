mod clock;
mod command;
mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::TimerCommand;
pub use tracker::{Controls, TimeTracker, TimerMode, TrackerSnapshot, TrackerStatus};

/// Default refresh cadence for front ends driving `tick()`.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
