// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input file not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A field the probe output must carry is absent
    #[error("Missing metadata in {path}: {field}")]
    MissingMetadata { path: String, field: String },

    /// A field is present but cannot be interpreted
    #[error("Invalid metadata in {path}: {field} = {value:?}")]
    InvalidMetadata {
        path: String,
        field: String,
        value: String,
    },

    /// The media prober could not be run or returned garbage
    #[error("Failed to probe media file: {0}")]
    ProbeFailed(String),

    /// The remux subprocess failed or produced an unusable file
    #[error("Failed to remux media file: {0}")]
    RemuxFailed(String),

    /// The playlist document lacks the structure we need
    #[error("Invalid playlist {path}: {message}")]
    InvalidPlaylist { path: String, message: String },

    /// XML read or write error
    #[error("XML error: {0}")]
    Xml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;

impl DomainError {
    /// Shorthand for a required probe field that is absent
    pub fn missing(path: impl Into<String>, field: impl Into<String>) -> Self {
        DomainError::MissingMetadata {
            path: path.into(),
            field: field.into(),
        }
    }

    /// Shorthand for XML errors coming out of quick-xml
    pub fn xml(err: impl std::fmt::Display) -> Self {
        DomainError::Xml(err.to_string())
    }
}
