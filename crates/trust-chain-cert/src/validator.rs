//! Reference passage validation.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use trust_chain_analysis::extract_references;
use trust_chain_core::config::PassageValidationConfig;
use trust_chain_embeddings::{EmbeddingProvider, PassageStore};

/// One passage whose bonus-adjusted similarity cleared the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassageMatch {
    /// Canonical passage reference.
    pub reference: String,
    /// Passage text.
    pub text: String,
    /// Raw cosine similarity.
    pub similarity: f32,
    /// Similarity plus containment and mention bonuses, capped at 1.0.
    pub adjusted_similarity: f32,
}

/// Passage validation result.
///
/// A zero score with an empty match list is the degraded outcome for a
/// missing store or unavailable provider; it is reported, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassageValidation {
    /// Overall passage-alignment score, in `[0, 1]`.
    pub score: f32,
    /// Matches above the threshold, best first, truncated.
    pub matches: Vec<PassageMatch>,
    /// Total number of matches before truncation.
    pub match_count: usize,
}

/// Matches candidate text against the reference passage store.
pub struct PassageValidator<'a> {
    provider: &'a dyn EmbeddingProvider,
    config: PassageValidationConfig,
}

impl<'a> PassageValidator<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider, config: PassageValidationConfig) -> Self {
        Self { provider, config }
    }

    /// Validate candidate text against every stored passage.
    ///
    /// Per passage: cosine similarity, plus `exact_match_bonus` when the
    /// passage text or its reference appears verbatim in the candidate,
    /// plus `reference_mention_bonus` per overlapping extracted reference
    /// mention. Passages whose capped, adjusted similarity clears the
    /// threshold are kept. The overall score blends the top match with the
    /// mean of the rest and penalizes very short candidates.
    pub fn validate(&self, store: &PassageStore, content: &str) -> PassageValidation {
        if store.is_empty() {
            debug!("passage store is empty, validation degrades to zero");
            return PassageValidation::default();
        }

        let content_vector = match self.provider.embed_one(content) {
            Ok(vector) => vector,
            Err(err) => {
                warn!(error = %err, "embedding unavailable, passage validation degrades to zero");
                return PassageValidation::default();
            }
        };

        let mentions = extract_references(content);
        let passages: Vec<(&str, &trust_chain_embeddings::StoredPassage)> =
            store.iter().collect();

        let mut matches: Vec<PassageMatch> = passages
            .par_iter()
            .filter_map(|(reference, passage)| {
                let similarity = self.provider.similarity(&content_vector, &passage.vector);

                let mut bonus = 0.0f32;
                if content.contains(&passage.text)
                    || content.contains(reference)
                    || content.contains(&reference.to_lowercase())
                {
                    bonus += self.config.exact_match_bonus;
                }
                for mention in &mentions {
                    if reference.contains(mention.as_str()) || mention.contains(reference) {
                        bonus += self.config.reference_mention_bonus;
                    }
                }

                let adjusted_similarity = (similarity + bonus).min(1.0);
                if adjusted_similarity >= self.config.similarity_threshold {
                    Some(PassageMatch {
                        reference: reference.to_string(),
                        text: passage.text.clone(),
                        similarity,
                        adjusted_similarity,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.adjusted_similarity
                .partial_cmp(&a.adjusted_similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let match_count = matches.len();
        let mut score = match match_count {
            0 => 0.0,
            1 => matches[0].adjusted_similarity,
            _ => {
                let top = matches[0].adjusted_similarity;
                let rest: f32 = matches[1..]
                    .iter()
                    .map(|candidate| candidate.adjusted_similarity)
                    .sum::<f32>()
                    / (match_count - 1) as f32;
                top * self.config.top_match_weight + rest * self.config.other_matches_weight
            }
        };

        if content.split_whitespace().count() < self.config.short_text_words {
            score *= self.config.short_text_penalty;
        }

        matches.truncate(self.config.max_matches);
        debug!(match_count, score, "passage validation complete");

        PassageValidation {
            score: score.clamp(0.0, 1.0),
            matches,
            match_count,
        }
    }

    /// Passage-alignment score dampened by match count.
    ///
    /// Zero matches score 0.0 exactly; otherwise the validation score is
    /// scaled by `min(1, sqrt(count / dampening_match_count))` so a single
    /// lucky match cannot dominate.
    pub fn theological_alignment(&self, store: &PassageStore, content: &str) -> f32 {
        let validation = self.validate(store, content);
        if validation.match_count == 0 {
            return 0.0;
        }
        let dampening = ((validation.match_count as f32
            / self.config.dampening_match_count as f32)
            .sqrt())
        .min(1.0);
        validation.score * dampening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_chain_embeddings::HashedBowEmbedder;

    fn store(embedder: &HashedBowEmbedder) -> PassageStore {
        PassageStore::generate(
            embedder,
            &[
                (
                    "John 3:16".to_string(),
                    "For God so loved the world that he gave his only Son".to_string(),
                ),
                (
                    "Psalm 23".to_string(),
                    "The Lord is my shepherd; I shall not want".to_string(),
                ),
            ],
        )
        .unwrap()
    }

    fn validator(embedder: &HashedBowEmbedder) -> PassageValidator<'_> {
        PassageValidator::new(embedder, PassageValidationConfig::default())
    }

    #[test]
    fn empty_store_scores_exactly_zero() {
        let embedder = HashedBowEmbedder::default();
        let validator = validator(&embedder);
        let validation = validator.validate(&PassageStore::empty(), "any text at all");
        assert_eq!(validation.score, 0.0);
        assert!(validation.matches.is_empty());
        assert_eq!(validation.match_count, 0);
    }

    #[test]
    fn quoting_a_passage_matches_it() {
        let embedder = HashedBowEmbedder::default();
        let store = store(&embedder);
        let validator = validator(&embedder);
        let content = "As John 3:16 says: For God so loved the world that he gave his \
             only Son, and I believe it.";
        let validation = validator.validate(&store, content);
        assert!(validation.match_count >= 1);
        assert_eq!(validation.matches[0].reference, "John 3:16");
        assert!(validation.score > 0.7);
    }

    #[test]
    fn unrelated_text_matches_nothing() {
        let embedder = HashedBowEmbedder::default();
        let store = store(&embedder);
        let validator = validator(&embedder);
        let validation = validator.validate(
            &store,
            "Compilers translate source code into machine instructions for execution.",
        );
        assert_eq!(validation.match_count, 0);
        assert_eq!(validation.score, 0.0);
    }

    #[test]
    fn short_text_is_penalized() {
        let embedder = HashedBowEmbedder::default();
        let store = store(&embedder);
        let validator = validator(&embedder);
        // Exact passage text, but under ten words after the penalty window.
        let long = "For God so loved the world that he gave his only Son";
        let short = "The Lord is my shepherd; I shall not want";
        let long_validation = validator.validate(&store, long);
        let short_validation = validator.validate(&store, short);
        assert!(long_validation.score > 0.9);
        // Nine words: the 0.8 multiplier applies.
        assert!(short_validation.score < long_validation.score);
    }

    #[test]
    fn theological_alignment_dampens_single_matches() {
        let embedder = HashedBowEmbedder::default();
        let store = store(&embedder);
        let validator = validator(&embedder);
        let content = "For God so loved the world that he gave his only Son";
        let validation = validator.validate(&store, content);
        let alignment = validator.theological_alignment(&store, content);
        assert!(validation.match_count >= 1);
        assert!(alignment < validation.score);
    }

    #[test]
    fn theological_alignment_is_zero_without_matches() {
        let embedder = HashedBowEmbedder::default();
        let store = store(&embedder);
        let validator = validator(&embedder);
        assert_eq!(
            validator.theological_alignment(&store, "Nothing scriptural in this sentence."),
            0.0
        );
    }
}
