//! Error types for syllabus-core.

use thiserror::Error;

/// Errors that can occur while ingesting, configuring or projecting syllabus items.
#[derive(Error, Debug)]
pub enum SyllabusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported media type '{0}', expected application/pdf")]
    UnsupportedMediaType(String),

    #[error("Syllabus parse error: {0}")]
    Parse(String),

    #[error("No syllabus items found in '{0}'")]
    EmptyResult(String),

    #[error("Malformed date '{0}'")]
    MalformedDate(String),

    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for syllabus operations.
pub type SyllabusResult<T> = Result<T, SyllabusError>;
