//! Certification error types.

use thiserror::Error;

use trust_chain_embeddings::EmbeddingError;

/// Errors that abort a certification run.
///
/// Validity problems are not errors; they attenuate the score and travel
/// with the report. A missing passage store degrades the validator to a
/// zero score instead of raising.
#[derive(Debug, Error)]
pub enum CertError {
    /// The loaded corpus holds no principle nodes to score against.
    #[error("No principle nodes available to score against")]
    NoPrinciples,

    /// The embedding provider failed; fatal for the whole run.
    #[error("Embedding provider failed: {0}")]
    Provider(#[from] EmbeddingError),

    /// The run configuration failed validation.
    #[error("Invalid certification configuration: {0}")]
    Config(String),
}

/// Result type for certification operations.
pub type CertResult<T> = Result<T, CertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_convert() {
        let err: CertError = EmbeddingError::EmptyInput.into();
        assert!(matches!(err, CertError::Provider(_)));
    }

    #[test]
    fn no_principles_display() {
        assert!(format!("{}", CertError::NoPrinciples).contains("No principle nodes"));
    }
}
