// error.rs — Error types for the goal tracking subsystem.

use thiserror::Error;

/// Errors that can occur while creating, recording, or persisting goals.
#[derive(Debug, Error)]
pub enum GoalError {
    /// An event was recorded against a goal index that doesn't exist.
    #[error("goal index {index} is out of range (store has {len} goals)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A persisted line could not be decoded.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Goal input rejected at the creation boundary.
    #[error("invalid goal input: {0}")]
    InvalidInput(String),

    /// The config file exists but couldn't be read or parsed.
    #[error("invalid config at {path}: {reason}")]
    ConfigError { path: String, reason: String },

    /// Failed to serialize a journal event.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GoalError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GoalError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
