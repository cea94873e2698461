//! Core error types for sprout-core.
//!
//! Out-of-range goal indices and corrupt persisted slots are deliberately
//! NOT errors: the store treats the former as a no-op and the latter as
//! "use defaults". The types here cover the remaining fallible paths
//! (data directory resolution, slot IO, config parsing).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sprout-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to locate or create the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a slot
    #[error("Failed to write slot '{slot}' at {path}: {source}")]
    WriteFailed {
        slot: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a slot value
    #[error("Failed to serialize slot '{slot}': {source}")]
    SerializeFailed {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
