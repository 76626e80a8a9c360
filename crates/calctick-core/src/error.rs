//! Core error types for calctick-core.
//!
//! This module defines the error hierarchy using thiserror. Calculator
//! errors are recoverable by the user and surface as labelled display
//! state; configuration and IO errors propagate to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for calctick-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Expression evaluation errors
    #[error("Calculator error: {0}")]
    Calc(#[from] CalcError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not resolve or create the configuration directory
    #[error("Cannot prepare configuration directory {path}: {source}")]
    DirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Expression evaluation failures.
///
/// The `Display` text is the user-facing label; [`CalcError::label`] adds
/// the `Error: ` prefix shown in the result area.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    /// Characters outside digits, `.` and `+ - * /` after sanitization
    #[error("Invalid expression")]
    InvalidExpression,

    /// Evaluation produced a non-finite number
    #[error("Division by zero")]
    DivisionByZero,

    /// The tokenizer or parser rejected the expression
    #[error("Invalid syntax")]
    InvalidSyntax,
}

impl CalcError {
    pub fn label(&self) -> String {
        format!("Error: {self}")
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
