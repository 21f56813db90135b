//! Embedding provider trait.

use crate::error::{EmbeddingError, EmbeddingResult};
use crate::similarity::cosine_similarity;

/// Contract for an external text embedding service.
///
/// Implementations turn batches of strings into unit-normalized vectors of
/// a fixed dimensionality and report their model identity. Batching is the
/// implementation's concern; callers may submit any batch of length 1..N.
///
/// # Thread Safety
///
/// `Send + Sync` so a provider can be shared across parallel scoring
/// sweeps. The engine itself only ever blocks on provider calls.
///
/// # Error Handling
///
/// `embed` fails with [`EmbeddingError::EmptyInput`] for an empty batch
/// and [`EmbeddingError::Provider`] when the underlying service fails.
/// Provider failures are propagated, never retried here.
pub trait EmbeddingProvider: Send + Sync {
    /// Identity of the model backing this provider.
    fn model_name(&self) -> &str;

    /// Dimensionality of the vectors this provider produces.
    fn dimension(&self) -> usize;

    /// Embed a batch of texts, one unit vector per input.
    fn embed(&self, texts: &[&str]) -> EmbeddingResult<Vec<Vec<f32>>>;

    /// Embed a single text.
    fn embed_one(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        let mut vectors = self.embed(&[text])?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::Provider("provider returned no vector for input".to_string())
        })
    }

    /// Cosine similarity between two vectors, in `[-1, 1]`.
    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    /// Reject an empty batch before handing it to the model.
    fn validate_batch(&self, texts: &[&str]) -> EmbeddingResult<()> {
        if texts.is_empty() {
            Err(EmbeddingError::EmptyInput)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    impl EmbeddingProvider for FixedProvider {
        fn model_name(&self) -> &str {
            "fixed"
        }

        fn dimension(&self) -> usize {
            2
        }

        fn embed(&self, texts: &[&str]) -> EmbeddingResult<Vec<Vec<f32>>> {
            self.validate_batch(texts)?;
            Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
        }
    }

    #[test]
    fn embed_one_unwraps_single_vector() {
        let provider = FixedProvider;
        let vector = provider.embed_one("anything").unwrap();
        assert_eq!(vector, vec![1.0, 0.0]);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let provider = FixedProvider;
        assert!(matches!(
            provider.embed(&[]),
            Err(EmbeddingError::EmptyInput)
        ));
    }

    #[test]
    fn default_similarity_is_cosine() {
        let provider = FixedProvider;
        assert!((provider.similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
    }
}
