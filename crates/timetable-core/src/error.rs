//! Core error types for timetable-core.
//!
//! The scheduling operations themselves express "failure" as values (no-op
//! flags, truncated schedules). These types cover the edges around them:
//! roster edits, configuration, and the local state file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timetable-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// State file errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Local state file errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the state file
    #[error("Failed to read state from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the state file
    #[error("Failed to write state to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State file exists but is not valid JSON for the current format
    #[error("Corrupt state file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Generation was asked for with nothing to schedule
    #[error("no study hours requested: add a subject with a name and at least one hour per day")]
    NoRequestedHours,

    /// Priority outside the 1-3 range
    #[error("priority must be 1 (low), 2 (medium) or 3 (high), got {0}")]
    PriorityOutOfRange(u8),

    /// Two obligations claim the same hour
    #[error("fixed obligations '{first}' and '{second}' share hour {hour}")]
    DuplicateObligationHour {
        hour: u8,
        first: String,
        second: String,
    },

    /// Hour outside 0-23 or an inverted window
    #[error("invalid hour window {start}..={end}")]
    InvalidWindow { start: u8, end: u8 },

    /// No subject with the given id
    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    /// Weekday name could not be parsed
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
