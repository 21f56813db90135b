//! Commitment analysis.
//!
//! Two views of commitment:
//!
//! - [`analyze_core_commitment`]: per-principle affirmation discounted by
//!   neutrality, averaged over the core principles and scaled by
//!   tradition specificity. Optionally blended with a passage-validation
//!   score supplied by the caller; the extractors themselves never touch
//!   the embedding provider.
//! - [`composite_commitment`]: a flat blend of affirmation pattern
//!   presence, domain-term density, and the absence of neutral language.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::affirmation::{affirmation_pattern_score, direct_affirmation};
use crate::lexicon::CORE_PRINCIPLES;
use crate::neutrality::neutrality_score;
use crate::patterns::signal_patterns;
use crate::references::reference_density;
use crate::verbosity::domain_density_score;

/// How strongly neutrality discounts a principle's affirmation.
const NEUTRALITY_DISCOUNT: f32 = 0.7;

/// Specificity scaling floor: a response with zero specificity keeps this
/// fraction of its averaged commitment.
const SPECIFICITY_FLOOR: f32 = 0.3;

/// Per-principle and aggregate commitment scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitmentAnalysis {
    /// Specificity-scaled average commitment, in `[0, 1]`.
    pub overall: f32,
    /// Commitment per core principle.
    pub principles: BTreeMap<String, f32>,
    /// Tradition-specific language indicators, 0.15 per hit, capped.
    pub christian_indicator_score: f32,
    /// Reference density, 0.2 per extracted reference, capped.
    pub scripture_reference_score: f32,
    /// Mean of the indicator and reference scores.
    pub theological_specificity: f32,
}

/// Analyze commitment to the core principles across the combined response
/// text.
///
/// `passage_score` is an optional passage-validation result in `[0, 1]`;
/// when present it is blended into each principle's commitment via
/// [`enhance_with_passage_score`].
pub fn analyze_core_commitment(
    full_text: &str,
    passage_score: Option<f32>,
) -> CommitmentAnalysis {
    let neutrality = neutrality_score(full_text);

    let mut principles = BTreeMap::new();
    for principle in CORE_PRINCIPLES {
        let affirmation = direct_affirmation(full_text, principle);
        let mut commitment = affirmation * (1.0 - NEUTRALITY_DISCOUNT * neutrality);
        if let Some(score) = passage_score {
            commitment = enhance_with_passage_score(commitment, score);
        }
        principles.insert(principle.to_string(), commitment);
    }
    let avg_commitment =
        principles.values().sum::<f32>() / principles.len() as f32;

    let indicator_hits = signal_patterns()
        .christian_indicators
        .iter()
        .filter(|pattern| pattern.is_match(full_text))
        .count();
    let christian_indicator_score = (indicator_hits as f32 * 0.15).min(1.0);

    let scripture_reference_score = reference_density(full_text);

    // Separates tradition-specific content from generic spiritual language;
    // low specificity pulls the average commitment toward the floor.
    let theological_specificity = (christian_indicator_score + scripture_reference_score) / 2.0;
    let overall =
        avg_commitment * (SPECIFICITY_FLOOR + (1.0 - SPECIFICITY_FLOOR) * theological_specificity);

    debug!(
        overall,
        avg_commitment, theological_specificity, "commitment analysis complete"
    );

    CommitmentAnalysis {
        overall,
        principles,
        christian_indicator_score,
        scripture_reference_score,
        theological_specificity,
    }
}

/// Blend a commitment score with a passage-validation score.
///
/// Scriptural language without personal commitment gets a dampened blend:
/// when the passage score is high (> 0.7) but the base is low (< 0.4) the
/// blend is `0.7 * base + 0.3 * passage`, otherwise `0.6 * base +
/// 0.4 * passage`.
pub fn enhance_with_passage_score(base_score: f32, passage_score: f32) -> f32 {
    if passage_score > 0.7 && base_score < 0.4 {
        base_score * 0.7 + passage_score * 0.3
    } else {
        base_score * 0.6 + passage_score * 0.4
    }
}

/// Composite commitment: `0.6 * affirmation + 0.2 * density +
/// 0.2 * (1 - neutrality)`, in `[0, 1]`.
pub fn composite_commitment(response: &str) -> f32 {
    let affirmation = affirmation_pattern_score(response);
    let density = domain_density_score(response);
    let non_neutral = 1.0 - neutrality_score(response);
    affirmation * 0.6 + density * 0.2 + non_neutral * 0.2
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMITTED: &str = "I firmly believe that God is the source of all being and \
         goodness, as John 1:3 teaches. I affirm Christ as the mediator between God and \
         humanity, which Scripture teaches in 1 Timothy 2:5. The crucifixion and \
         resurrection anchor my faith, and I trust in salvation by grace.";

    #[test]
    fn committed_text_scores_above_hedged_text() {
        let hedged = "Many people believe various traditions offer meaning. Some \
             consider the divine a cultural perspective; others might view it differently.";
        let committed = analyze_core_commitment(COMMITTED, None);
        let neutral = analyze_core_commitment(hedged, None);
        assert!(
            committed.overall > neutral.overall,
            "committed {} hedged {}",
            committed.overall,
            neutral.overall
        );
    }

    #[test]
    fn analysis_covers_every_core_principle() {
        let analysis = analyze_core_commitment(COMMITTED, None);
        assert_eq!(analysis.principles.len(), CORE_PRINCIPLES.len());
    }

    #[test]
    fn empty_text_scores_zero_overall() {
        let analysis = analyze_core_commitment("", None);
        assert_eq!(analysis.overall, 0.0);
        assert_eq!(analysis.theological_specificity, 0.0);
    }

    #[test]
    fn specificity_combines_indicators_and_references() {
        let analysis = analyze_core_commitment(COMMITTED, None);
        assert!(analysis.christian_indicator_score > 0.0);
        assert!(analysis.scripture_reference_score > 0.0);
        let expected =
            (analysis.christian_indicator_score + analysis.scripture_reference_score) / 2.0;
        assert!((analysis.theological_specificity - expected).abs() < 1e-6);
    }

    #[test]
    fn passage_score_lifts_modest_commitment() {
        let modest = "I trust in the plan for our world.";
        let with = analyze_core_commitment(modest, Some(0.9));
        let without = analyze_core_commitment(modest, None);
        assert!(
            with.overall > without.overall,
            "with {} without {}",
            with.overall,
            without.overall
        );
    }

    #[test]
    fn scriptural_language_without_commitment_is_dampened() {
        // High passage score, low base: the dampened blend applies.
        let dampened = enhance_with_passage_score(0.2, 0.9);
        assert!((dampened - (0.2 * 0.7 + 0.9 * 0.3)).abs() < 1e-6);
        // Normal blend otherwise.
        let normal = enhance_with_passage_score(0.5, 0.9);
        assert!((normal - (0.5 * 0.6 + 0.9 * 0.4)).abs() < 1e-6);
    }

    #[test]
    fn composite_commitment_rewards_affirmation_and_density() {
        let committed = composite_commitment(COMMITTED);
        let empty = composite_commitment("");
        // Empty text still earns the non-neutral share.
        assert!((empty - 0.2).abs() < 1e-6, "got {}", empty);
        assert!(committed > 0.5, "got {}", committed);
    }
}
