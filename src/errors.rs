//! Error types for document conversion.

use layered_timeml_corpus::{CorpusError, LocationKey};
use thiserror::Error;

/// An annotation could not be placed on the reconstructed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// A token location has no span in the reconstruction.
    #[error("no span recorded for token {location}")]
    MissingLocation { location: LocationKey },
}

/// Errors that can occur while converting a corpus.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Projection failed for one document.
    #[error("{filename}: {source}")]
    Projection {
        filename: String,
        #[source]
        source: ProjectionError,
    },

    /// Error reading or writing a file.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
