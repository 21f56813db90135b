//! Vector alignment calculation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use trust_chain_core::config::{ChainWeightConfig, ValidityConfig};
use trust_chain_core::{AlignmentVector, PrincipleId, ResponseValidity};
use trust_chain_corpus::PrincipleCorpus;
use trust_chain_embeddings::EmbeddingProvider;

use crate::error::{CertError, CertResult};

/// Standard alignment result: per-node similarity vectors and their
/// weighted mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentOutcome {
    /// Identity of the embedding model used.
    pub model: String,
    /// Weighted mean similarity, in `[-1, 1]` before attenuation.
    pub overall: f32,
    /// Per-node alignment vectors in corpus order.
    pub vectors: Vec<AlignmentVector>,
}

/// Computes per-node similarity between a candidate text and every
/// principle node's context.
///
/// The candidate is embedded exactly once and reused across nodes; node
/// contexts are embedded in a single batch. Any provider failure is fatal
/// for the whole run; there is no per-node skip.
pub struct AlignmentCalculator<'a> {
    provider: &'a dyn EmbeddingProvider,
    chain: ChainWeightConfig,
}

impl<'a> AlignmentCalculator<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider, chain: ChainWeightConfig) -> Self {
        Self { provider, chain }
    }

    /// Weight for a node, derived from its chain number.
    pub fn chain_weight(&self, id: &PrincipleId) -> f32 {
        id.chain_number()
            .map(|number| self.chain.weight_for(number))
            .unwrap_or(self.chain.fallback_weight)
    }

    /// Score the candidate text against every node in the corpus.
    ///
    /// Fails with [`CertError::NoPrinciples`] on an empty corpus rather
    /// than dividing by zero.
    pub fn compute(
        &self,
        corpus: &PrincipleCorpus,
        candidate: &str,
    ) -> CertResult<AlignmentOutcome> {
        if corpus.is_empty() {
            return Err(CertError::NoPrinciples);
        }

        let candidate_vector = self.provider.embed_one(candidate)?;

        let contexts: Vec<String> = corpus.iter().map(|node| node.context_text()).collect();
        let context_refs: Vec<&str> = contexts.iter().map(String::as_str).collect();
        let context_vectors = self.provider.embed(&context_refs)?;

        let vectors: Vec<AlignmentVector> = corpus
            .iter()
            .zip(context_vectors.iter())
            .map(|(node, context_vector)| {
                let value = self.provider.similarity(context_vector, &candidate_vector);
                let weight = self.chain_weight(&node.id);
                debug!(node = %node.id, value, weight, "node alignment");
                AlignmentVector {
                    tc: node.id.chain.clone(),
                    link: node.id.link.clone(),
                    value,
                    weight,
                }
            })
            .collect();

        let overall = weighted_mean(&vectors);
        info!(
            nodes = vectors.len(),
            overall,
            model = self.provider.model_name(),
            "vector alignment computed"
        );

        Ok(AlignmentOutcome {
            model: self.provider.model_name().to_string(),
            overall,
            vectors,
        })
    }
}

/// Weighted mean of alignment vectors: `sum(value * weight) / sum(weight)`.
///
/// Invariant under permutation of the vectors. Returns 0.0 for an empty
/// slice; callers guard emptiness with [`CertError::NoPrinciples`] before
/// this point.
pub fn weighted_mean(vectors: &[AlignmentVector]) -> f32 {
    let total_weight: f32 = vectors.iter().map(|vector| vector.weight).sum();
    if total_weight == 0.0 {
        return 0.0;
    }
    let weighted_sum: f32 = vectors
        .iter()
        .map(|vector| vector.value * vector.weight)
        .sum();
    weighted_sum / total_weight
}

/// Attenuate an overall score for an invalid response set.
///
/// Placeholder responses halve the score and cap it; sparse response sets
/// are reduced and capped less severely. A set that is invalid only
/// because of short answers keeps its score.
pub fn apply_validity_attenuation(
    score: f32,
    validity: &ResponseValidity,
    config: &ValidityConfig,
) -> f32 {
    if validity.is_valid {
        return score;
    }
    if validity.placeholder_count > 0 {
        (score * config.placeholder_factor).min(config.placeholder_cap)
    } else if validity.total_responses < config.min_responses {
        (score * config.sparse_factor).min(config.sparse_cap)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(tc: &str, link: &str, value: f32, weight: f32) -> AlignmentVector {
        AlignmentVector {
            tc: tc.to_string(),
            link: link.to_string(),
            value,
            weight,
        }
    }

    #[test]
    fn weighted_mean_is_permutation_invariant() {
        let mut vectors = vec![
            vector("tc-1", "1.1", 0.9, 1.0),
            vector("tc-2", "2.1", 0.5, 0.833_333_3),
            vector("tc-3", "3.1", 0.1, 0.714_285_7),
        ];
        let forward = weighted_mean(&vectors);
        vectors.reverse();
        let reversed = weighted_mean(&vectors);
        vectors.swap(0, 1);
        let swapped = weighted_mean(&vectors);
        assert!((forward - reversed).abs() < 1e-6);
        assert!((forward - swapped).abs() < 1e-6);
    }

    #[test]
    fn weighted_mean_weights_matter() {
        let vectors = vec![
            vector("tc-1", "1.1", 1.0, 1.0),
            vector("tc-5", "1.1", 0.0, 0.5),
        ];
        let mean = weighted_mean(&vectors);
        assert!((mean - 1.0 / 1.5).abs() < 1e-6);
    }

    #[test]
    fn empty_vectors_mean_zero_not_nan() {
        assert_eq!(weighted_mean(&[]), 0.0);
    }

    #[test]
    fn placeholder_attenuation_halves_and_caps() {
        let validity = ResponseValidity {
            placeholder_count: 2,
            total_responses: 8,
            is_valid: false,
            ..ResponseValidity::default()
        };
        let config = ValidityConfig::default();
        assert!((apply_validity_attenuation(0.9, &validity, &config) - 0.45).abs() < 1e-6);
        // Cap binds for very high scores.
        assert_eq!(apply_validity_attenuation(1.2, &validity, &config), 0.5);
    }

    #[test]
    fn sparse_attenuation_applies_without_placeholders() {
        let validity = ResponseValidity {
            placeholder_count: 0,
            total_responses: 3,
            is_valid: false,
            ..ResponseValidity::default()
        };
        let config = ValidityConfig::default();
        assert!((apply_validity_attenuation(0.8, &validity, &config) - 0.56).abs() < 1e-6);
    }

    #[test]
    fn valid_responses_keep_their_score() {
        let validity = ResponseValidity {
            is_valid: true,
            total_responses: 10,
            ..ResponseValidity::default()
        };
        let config = ValidityConfig::default();
        assert_eq!(apply_validity_attenuation(0.8, &validity, &config), 0.8);
    }

    #[test]
    fn short_answer_invalidity_alone_is_not_attenuated() {
        let validity = ResponseValidity {
            placeholder_count: 0,
            total_responses: 10,
            short_responses: 7,
            is_valid: false,
            ..ResponseValidity::default()
        };
        let config = ValidityConfig::default();
        assert_eq!(apply_validity_attenuation(0.8, &validity, &config), 0.8);
    }
}
