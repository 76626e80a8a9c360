//! Time tracker implementation.
//!
//! The tracker is a clock-driven state machine with two modes. It does not
//! use internal threads - the caller is responsible for calling `tick()`
//! periodically while it is running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ...
//!            |
//!            +-> Finished   (countdown reached zero)
//! reset() / mode change -> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut tracker = TimeTracker::new(SystemClock);
//! tracker.set_mode(TimerMode::Countdown);
//! tracker.set_seconds(5);
//! tracker.start();
//! // Every 100ms:
//! tracker.tick(); // Returns Some(Event::TimerFinished) when the countdown ends
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use crate::events::Event;
use crate::format::format_mm_ss;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    #[default]
    Stopwatch,
    Countdown,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerMode::Stopwatch => f.write_str("stopwatch"),
            TimerMode::Countdown => f.write_str("countdown"),
        }
    }
}

impl FromStr for TimerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stopwatch" => Ok(TimerMode::Stopwatch),
            "countdown" | "timer" => Ok(TimerMode::Countdown),
            other => Err(format!("unknown timer mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerStatus {
    Idle,
    Running,
    Paused,
    /// Countdown reached zero while running.
    Finished,
}

/// Which controls a front end should offer, derived from tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
    pub mode_selector: bool,
    pub duration_inputs: bool,
}

/// What a front end renders for the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub mode: TimerMode,
    pub status: TrackerStatus,
    pub display_ms: u64,
    /// `display_ms` as `MM:SS`.
    pub display: String,
    pub controls: Controls,
}

/// Stopwatch / countdown state machine.
///
/// Stored offsets only change at pause boundaries; the live value is
/// computed on demand from the anchor and the clock.
#[derive(Debug, Clone)]
pub struct TimeTracker<C = SystemClock> {
    clock: C,
    mode: TimerMode,
    status: TrackerStatus,
    /// Clock reading when the current run segment began. Set only while running.
    anchor_ms: Option<u64>,
    /// Stopwatch time folded in at previous pauses.
    accumulated_ms: u64,
    /// Countdown time left as of the last pause (or start).
    remaining_ms: u64,
    minutes: u32,
    seconds: u32,
}

impl<C: Clock> TimeTracker<C> {
    /// Create an idle stopwatch.
    pub fn new(clock: C) -> Self {
        Self::with_mode(clock, TimerMode::Stopwatch)
    }

    pub fn with_mode(clock: C, mode: TimerMode) -> Self {
        Self {
            clock,
            mode,
            status: TrackerStatus::Idle,
            anchor_ms: None,
            accumulated_ms: 0,
            remaining_ms: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn status(&self) -> TrackerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TrackerStatus::Running
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Countdown length configured by the duration inputs.
    pub fn configured_ms(&self) -> u64 {
        u64::from(self.minutes)
            .saturating_mul(60_000)
            .saturating_add(u64::from(self.seconds).saturating_mul(1000))
    }

    /// Live value: elapsed time for a stopwatch, time left for a countdown.
    pub fn display_ms(&self) -> u64 {
        let elapsed = self.elapsed_since_anchor();
        match self.mode {
            TimerMode::Stopwatch => self.accumulated_ms.saturating_add(elapsed),
            TimerMode::Countdown => self.remaining_ms.saturating_sub(elapsed),
        }
    }

    pub fn display(&self) -> String {
        format_mm_ss(self.display_ms())
    }

    pub fn controls(&self) -> Controls {
        let running = self.is_running();
        Controls {
            start: !running && self.can_start(),
            pause: running,
            reset: self.status != TrackerStatus::Idle,
            mode_selector: !running,
            duration_inputs: self.mode == TimerMode::Countdown
                && matches!(self.status, TrackerStatus::Idle | TrackerStatus::Finished),
        }
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        let display_ms = self.display_ms();
        TrackerSnapshot {
            mode: self.mode,
            status: self.status,
            display_ms,
            display: format_mm_ss(display_ms),
            controls: self.controls(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        if self.mode == TimerMode::Countdown && self.remaining_ms == 0 {
            self.remaining_ms = self.configured_ms();
            if self.remaining_ms == 0 {
                tracing::debug!("countdown start refused: zero duration");
                return None;
            }
        }

        self.anchor_ms = Some(self.clock.now_ms());
        self.status = TrackerStatus::Running;
        tracing::debug!(mode = %self.mode, display_ms = self.display_ms(), "tracker started");
        Some(Event::TimerStarted {
            mode: self.mode,
            display_ms: self.display_ms(),
            at: self.timestamp(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.fold_elapsed();
        self.status = TrackerStatus::Paused;
        tracing::debug!(mode = %self.mode, display_ms = self.display_ms(), "tracker paused");
        Some(Event::TimerPaused {
            mode: self.mode,
            display_ms: self.display_ms(),
            at: self.timestamp(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.status = TrackerStatus::Idle;
        self.anchor_ms = None;
        self.accumulated_ms = 0;
        self.remaining_ms = 0;
        tracing::debug!(mode = %self.mode, "tracker reset");
        Some(Event::TimerReset {
            mode: self.mode,
            at: self.timestamp(),
        })
    }

    /// Switch modes. Any actual change resets every counter.
    pub fn set_mode(&mut self, mode: TimerMode) -> Option<Event> {
        if mode == self.mode {
            return None;
        }
        let from = self.mode;
        self.mode = mode;
        self.reset();
        Some(Event::ModeChanged {
            from,
            to: mode,
            at: self.timestamp(),
        })
    }

    pub fn set_minutes(&mut self, minutes: u32) -> Option<Event> {
        self.minutes = minutes;
        self.duration_changed()
    }

    pub fn set_seconds(&mut self, seconds: u32) -> Option<Event> {
        self.seconds = seconds;
        self.duration_changed()
    }

    /// Call periodically while running. Returns `Some(Event::TimerFinished)`
    /// when a countdown reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() || self.mode != TimerMode::Countdown {
            return None;
        }
        if self.display_ms() > 0 {
            return None;
        }

        self.anchor_ms = None;
        self.remaining_ms = 0;
        self.status = TrackerStatus::Finished;
        tracing::debug!("countdown finished");
        Some(Event::TimerFinished {
            at: self.timestamp(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn can_start(&self) -> bool {
        self.mode == TimerMode::Stopwatch || self.remaining_ms > 0 || self.configured_ms() > 0
    }

    fn elapsed_since_anchor(&self) -> u64 {
        self.anchor_ms
            .map(|anchor| self.clock.now_ms().saturating_sub(anchor))
            .unwrap_or(0)
    }

    fn fold_elapsed(&mut self) {
        let elapsed = self.elapsed_since_anchor();
        match self.mode {
            TimerMode::Stopwatch => {
                self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed);
            }
            TimerMode::Countdown => {
                self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            }
        }
        self.anchor_ms = None;
    }

    fn duration_changed(&self) -> Option<Event> {
        Some(Event::DurationChanged {
            minutes: self.minutes,
            seconds: self.seconds,
            at: self.timestamp(),
        })
    }

    fn timestamp(&self) -> DateTime<Utc> {
        i64::try_from(self.clock.now_ms())
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_default()
    }
}
