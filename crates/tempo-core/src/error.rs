//! Core error types for tempo-core.
//!
//! The taxonomy is deliberately small: validation failures, missing
//! (or non-owned) entities, storage failures, and configuration failures.
//! Authorization is not represented here -- callers resolve identity before
//! the core is invoked.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tempo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required field is missing or a value is out of range.
    #[error("{0}")]
    Validation(String),

    /// The entity does not exist or is not owned by the caller.
    /// The two cases are indistinguishable on purpose.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Persistence failures, surfaced generically and never retried.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

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
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
