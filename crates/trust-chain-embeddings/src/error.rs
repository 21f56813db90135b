//! Embedding error types.

use thiserror::Error;

/// Errors raised by embedding providers and the passage store.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The underlying embedding service failed. Not retried here.
    #[error("Embedding provider error: {0}")]
    Provider(String),

    /// A vector did not have the expected dimensionality.
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// An empty batch was submitted for embedding.
    #[error("Empty input provided for embedding")]
    EmptyInput,

    /// The passage cache could not be read or parsed.
    #[error("Passage cache error at {path}: {message}")]
    Cache {
        /// Cache file path
        path: String,
        /// Failure description
        message: String,
    },
}

/// Result type for embedding operations.
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;

impl EmbeddingError {
    /// Create a cache error for the given path.
    pub fn cache(path: impl Into<String>, message: impl Into<String>) -> Self {
        EmbeddingError::Cache {
            path: path.into(),
            message: message.into(),
        }
    }
}
