//! Error types for the state module.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StateError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored value could not be encoded or decoded.
    #[error("Invalid value for key {key}: {reason}")]
    Serialization { key: String, reason: String },

    /// The store lock was poisoned by a panicking writer.
    #[error("State store lock poisoned")]
    LockPoisoned,
}

impl From<rusqlite::Error> for StateError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
