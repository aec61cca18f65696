//! Version Stamper Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StampError {
    #[error("Repository metadata unavailable: {message}")]
    MetadataUnavailable { message: String },

    #[error("Missing configuration: {message}")]
    MissingConfiguration { message: String },

    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for stamper operations
pub type StampResult<T> = Result<T, StampError>;
