//! Error types for artifact reading and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading centerline artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The file doesn't exist at the given path.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but its JSON payload could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;
