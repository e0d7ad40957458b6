//! Playground errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or exporting the playground
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`crate::PlaygroundConfig`]
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Render tree could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for playground operations
pub type Result<T> = std::result::Result<T, PlaygroundError>;
