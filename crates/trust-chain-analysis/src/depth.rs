//! Theological specificity and depth scoring.

use crate::lexicon::concept_weights;
use crate::patterns::signal_patterns;

/// Score the depth and specificity of theological engagement.
///
/// Two components:
///
/// 1. vocabulary: matched concepts contribute their tier weight
///    (0.5/0.7/1.0), normalized by `count * 0.7` and capped at 1.0
/// 2. reasoning: each matched complex-reasoning pattern adds 0.15, capped
///    at 1.0
///
/// Combined `0.4 * vocabulary + 0.6 * reasoning`, in `[0, 1]`.
pub fn theological_depth(response: &str) -> f32 {
    let lower = response.to_lowercase();

    let mut concept_score = 0.0f32;
    let mut concept_count = 0usize;
    for (concept, weight) in concept_weights() {
        if lower.contains(concept) {
            concept_score += weight;
            concept_count += 1;
        }
    }
    let vocabulary = if concept_count > 0 {
        (concept_score / (concept_count as f32 * 0.7)).min(1.0)
    } else {
        0.0
    };

    let mut reasoning = 0.0f32;
    for pattern in &signal_patterns().depth_indicators {
        if pattern.is_match(response) {
            reasoning += 0.15;
        }
    }
    let reasoning = reasoning.min(1.0);

    0.4 * vocabulary + 0.6 * reasoning
}
