use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::timer::TimerMode;

/// Every state change in either widget produces an Event.
/// Front ends render from snapshots and may log or react to events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        display_ms: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        display_ms: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero while running.
    TimerFinished {
        at: DateTime<Utc>,
    },
    ModeChanged {
        from: TimerMode,
        to: TimerMode,
        at: DateTime<Utc>,
    },
    /// Countdown duration inputs changed.
    DurationChanged {
        minutes: u32,
        seconds: u32,
        at: DateTime<Utc>,
    },
    ExpressionEvaluated {
        expression: String,
        result: String,
        at: DateTime<Utc>,
    },
    EvaluationFailed {
        expression: String,
        error: CalcError,
        at: DateTime<Utc>,
    },
}
