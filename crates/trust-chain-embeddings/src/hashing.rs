//! Deterministic feature-hashing text embedder.
//!
//! Projects a bag of lowercased word tokens into a fixed-dimension space
//! by hashing each token to a bucket and a sign, then L2-normalizing the
//! accumulator. Identical text always embeds to the identical unit
//! vector, which makes this implementation suitable for offline runs and
//! for tests that assert exact-similarity behavior.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::EmbeddingResult;
use crate::provider::EmbeddingProvider;
use crate::similarity::l2_normalize;

/// Default projection dimensionality.
pub const DEFAULT_DIMENSION: usize = 256;

/// Feature-hashing bag-of-words embedding provider.
#[derive(Debug, Clone)]
pub struct HashedBowEmbedder {
    dimension: usize,
    model_name: String,
}

impl HashedBowEmbedder {
    /// Create an embedder with the given projection dimension.
    pub fn new(dimension: usize) -> Self {
        let dimension = dimension.max(1);
        Self {
            model_name: format!("hashed-bow-{}", dimension),
            dimension,
        }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut accumulator = vec![0.0f32; self.dimension];
        for token in tokenize(text) {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let digest = hasher.finish();
            let bucket = (digest % self.dimension as u64) as usize;
            let sign = if digest & (1 << 63) == 0 { 1.0 } else { -1.0 };
            accumulator[bucket] += sign;
        }
        l2_normalize(&mut accumulator);
        accumulator
    }
}

impl Default for HashedBowEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl EmbeddingProvider for HashedBowEmbedder {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, texts: &[&str]) -> EmbeddingResult<Vec<Vec<f32>>> {
        self.validate_batch(texts)?;
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }
}

/// Lowercased alphanumeric word tokens.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::cosine_similarity;

    #[test]
    fn identical_text_embeds_identically() {
        let embedder = HashedBowEmbedder::default();
        let a = embedder.embed_one("In the beginning God created").unwrap();
        let b = embedder.embed_one("In the beginning God created").unwrap();
        assert_eq!(a, b);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn vectors_are_unit_norm() {
        let embedder = HashedBowEmbedder::default();
        let v = embedder.embed_one("grace and truth").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let embedder = HashedBowEmbedder::default();
        let v = embedder.embed_one("").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn different_text_differs() {
        let embedder = HashedBowEmbedder::default();
        let a = embedder.embed_one("faith hope love").unwrap();
        let b = embedder.embed_one("entirely unrelated words here").unwrap();
        assert!(cosine_similarity(&a, &b) < 0.99);
    }

    #[test]
    fn tokenization_is_case_insensitive() {
        let embedder = HashedBowEmbedder::default();
        let a = embedder.embed_one("GRACE").unwrap();
        let b = embedder.embed_one("grace").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_embeds_each_input() {
        let embedder = HashedBowEmbedder::default();
        let vectors = embedder.embed(&["one", "two", "three"]).unwrap();
        assert_eq!(vectors.len(), 3);
        assert!(vectors.iter().all(|v| v.len() == DEFAULT_DIMENSION));
    }

    #[test]
    fn model_name_reports_dimension() {
        assert_eq!(HashedBowEmbedder::new(64).model_name(), "hashed-bow-64");
    }
}
