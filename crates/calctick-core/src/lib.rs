//! # calctick Core Library
//!
//! This library provides the logic behind two small interactive widgets:
//! an arithmetic calculator and a stopwatch/countdown timer. Front ends
//! (the bundled CLI, or any GUI shell) feed input commands in and render
//! snapshots out; no widget state lives outside the structs below.
//!
//! ## Architecture
//!
//! - **Expression Engine**: Accumulates an expression from key/button input
//!   and evaluates it with a hand-written tokenizer and precedence parser
//! - **Time Tracker**: A clock-driven state machine that requires the caller
//!   to periodically invoke `tick()` while running
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ExpressionEngine`]: Calculator state and evaluation
//! - [`TimeTracker`]: Stopwatch / countdown state machine
//! - [`Clock`]: Injectable time source ([`SystemClock`], [`ManualClock`])
//! - [`Config`]: Application configuration management

pub mod calc;
pub mod error;
pub mod events;
pub mod format;
pub mod storage;
pub mod timer;

pub use calc::{CalcCommand, CalcSnapshot, ExpressionEngine, Operator};
pub use error::{CalcError, ConfigError, CoreError};
pub use events::Event;
pub use format::{format_mm_ss, format_number};
pub use storage::Config;
pub use timer::{
    Clock, Controls, ManualClock, SystemClock, TimeTracker, TimerCommand, TimerMode,
    TrackerSnapshot, TrackerStatus,
};
