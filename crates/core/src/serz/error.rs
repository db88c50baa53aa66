//! Error types for the serz module.

use std::path::PathBuf;
use thiserror::Error;

use crate::state::StateError;

/// Errors that can occur while converting a file with serz.
#[derive(Debug, Error)]
pub enum SerzError {
    /// The configured serz path does not point to an existing executable.
    #[error("Invalid serz executable path: {message}")]
    SerzPathInvalid { message: String },

    /// serz reported a failure. The message is serz's own output.
    #[error("Conversion failed: {message}")]
    ConversionFailed { message: String },

    /// The file does not carry an extension serz understands.
    #[error("Unsupported file extension {extension:?}: {path}")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// The path is not valid UTF-8, so its sibling cannot be named.
    #[error("Path is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    /// The serz process could not be started or awaited.
    #[error("Failed to run {executable}")]
    Spawn {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// serz did not finish in time.
    #[error("Conversion timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Renaming the converted file back to its special extension failed.
    #[error("Failed to rename {from} to {to}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the recovery map failed.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

/// Coarse classification used by callers to decide how to present an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration needs fixing.
    SerzPathInvalid,
    /// serz rejected the file.
    ConversionFailed,
    /// The input file cannot be converted at all.
    InvalidInput,
    /// Anything else.
    Unexpected,
}

impl SerzError {
    /// Creates a new serz path invalid error for a missing path.
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SerzPathInvalid {
            message: format!("Path \"{}\" does not exist.", path.into().display()),
        }
    }

    /// Creates a new conversion failed error carrying serz's output.
    pub fn conversion_failed(message: impl Into<String>) -> Self {
        Self::ConversionFailed {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SerzPathInvalid { .. } => ErrorKind::SerzPathInvalid,
            Self::ConversionFailed { .. } => ErrorKind::ConversionFailed,
            Self::UnsupportedExtension { .. } | Self::NonUtf8Path { .. } => ErrorKind::InvalidInput,
            Self::Spawn { .. }
            | Self::Timeout { .. }
            | Self::RenameFailed { .. }
            | Self::State(_) => ErrorKind::Unexpected,
        }
    }

    /// The bare message, without the variant prefix used by `Display`.
    pub fn message(&self) -> String {
        match self {
            Self::SerzPathInvalid { message } | Self::ConversionFailed { message } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}
