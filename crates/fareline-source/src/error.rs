//! Ingestion errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a ticket feed.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The inline feed text is empty.
    #[error("Json reading error: feed text is empty")]
    EmptyInput,

    /// The named resource does not exist.
    #[error("Cannot find resource file: {}", path.display())]
    ResourceNotFound {
        /// The resolved resource path.
        path: PathBuf,
    },

    /// The named resource exists but could not be read.
    #[error("Cannot read resource file '{}': {source}", path.display())]
    Io {
        /// The resolved resource path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The feed is not a valid ticket document.
    #[error("JSON parsing error in {origin}: {source}")]
    Json {
        /// Description of where the feed came from.
        origin: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
