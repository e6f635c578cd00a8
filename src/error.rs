//! Error types for loading and rendering coverage reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a clover report or writing its summary
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report path does not exist
    #[error("Code coverage report not found at {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The report exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The report is not a valid clover document
    #[error("Failed to parse clover.xml at {}: {message}", path.display())]
    Malformed {
        /// Path of the rejected report
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Writing to the output sink failed
    #[error("Failed to write coverage output: {0}")]
    Output(#[from] std::io::Error),

    /// The JSON export could not be serialized
    #[error("Failed to serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),
}
