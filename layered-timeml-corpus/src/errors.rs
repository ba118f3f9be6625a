//! Error types for corpus reading.

use thiserror::Error;

/// Errors that can occur while reading corpus files.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A line did not have the number of tab-separated fields its record
    /// shape requires.
    #[error("{source_name}:{line}: expected {expected} fields, found {found}: {text:?}")]
    MalformedLine {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
        text: String,
    },

    /// A sentence or word id was not an unsigned integer.
    #[error("{source_name}:{line}: invalid {field} {value:?}")]
    InvalidNumber {
        source_name: String,
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Error reading a corpus file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;
