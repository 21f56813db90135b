//! Corpus error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating or reading principle documents.
///
/// A document that parses but contains no matching sections is not an
/// error; it yields an empty corpus that the caller must inspect.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// No eligible principle documents exist at the given path.
    #[error("No principle documents found at {path}")]
    NotFound {
        /// Path that was searched
        path: PathBuf,
    },

    /// A document existed but could not be read.
    #[error("Failed to read principle document {path}: {source}")]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

impl CorpusError {
    /// Create a NotFound error for the given path.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        CorpusError::NotFound { path: path.into() }
    }

    /// Create an Io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_path() {
        let err = CorpusError::not_found("/doctrine/chains");
        assert!(format!("{}", err).contains("/doctrine/chains"));
    }
}
