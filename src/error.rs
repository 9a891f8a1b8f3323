//! Error types for paperfmt.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for paperfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a check or repair invocation.
///
/// Format deviations are never errors; they are reported as issues.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be loaded.
    #[error("Failed to load document {}: {source}", path.display())]
    Load {
        /// Path of the document
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// The document could not be saved.
    #[error("Failed to save document {}: {source}", path.display())]
    Save {
        /// Path of the document
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// Document model (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No store handles the file format.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Error while rendering a report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap an error as a load failure for `path`.
    pub fn load(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Load {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wrap an error as a save failure for `path`.
    pub fn save(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Save {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
