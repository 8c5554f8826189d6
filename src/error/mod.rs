//! Error handling for synthetic record generation, persistence and charting.

use std::io;

use arrow::error::ArrowError;

/// Errors that can occur while generating, persisting or summarising records
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Error opening, writing or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error building or reading Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error converting between records and record batches
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid sampling weights for a categorical column
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// A record or value violates a table invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the chart backend
    #[error("Chart error: {0}")]
    Chart(String),
}

impl SynthError {
    /// Create a validation error from any displayable message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_arrow::Error> for SynthError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type for synthetic record operations
pub type Result<T> = std::result::Result<T, SynthError>;
