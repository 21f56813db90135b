//! Score fusion.
//!
//! Two fusion heads, both clamped into `[0, 1]`:
//!
//! - [`enhanced_score`]: the weighted combination of the six linguistic
//!   signals
//! - [`blended_score`]: the raw vector alignment blended with the
//!   commitment analysis under an adversarial penalty multiplier
//!
//! Every input is clamped into `[0, 1]` before combination; negative
//! intermediate contributions can never push the output outside the unit
//! range.

use trust_chain_analysis::LinguisticSignals;
use trust_chain_core::clamp_unit;
use trust_chain_core::config::FusionWeights;

/// Fuse the signal bundle into the enhanced score.
///
/// `verbosity_threshold` turns the unbounded verbosity ratio into a flag;
/// a flagged response forfeits the verbosity share of the score.
pub fn enhanced_score(
    signals: &LinguisticSignals,
    weights: &FusionWeights,
    verbosity_threshold: f32,
) -> f32 {
    let affirmation = clamp_unit(signals.affirmation);
    let neutrality = clamp_unit(signals.neutrality);
    let commitment = clamp_unit(signals.commitment);
    let adversarial = clamp_unit(signals.adversarial);
    let specificity = clamp_unit(signals.specificity);
    let verbosity_flag = if signals.verbosity_ratio > verbosity_threshold {
        1.0
    } else {
        0.0
    };

    let score = affirmation * weights.affirmation
        + (1.0 - neutrality) * weights.neutrality
        + commitment * weights.commitment
        + (1.0 - verbosity_flag) * weights.verbosity
        + (1.0 - adversarial) * weights.adversarial
        + specificity * weights.specificity;

    clamp_unit(score)
}

/// Blend the raw vector alignment with the commitment analysis.
///
/// `adversarial` is the stance score; it discounts the blend by
/// `1 - penalty * adversarial`.
pub fn blended_score(
    vector_alignment: f32,
    commitment: f32,
    adversarial: f32,
    weights: &FusionWeights,
) -> f32 {
    let vector_alignment = clamp_unit(vector_alignment);
    let commitment = clamp_unit(commitment);
    let adversarial = clamp_unit(adversarial);

    let blend = vector_alignment * weights.blend_vector + commitment * weights.blend_commitment;
    clamp_unit(blend * (1.0 - weights.blend_adversarial_penalty * adversarial))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(
        affirmation: f32,
        neutrality: f32,
        commitment: f32,
        verbosity_ratio: f32,
        adversarial: f32,
        specificity: f32,
    ) -> LinguisticSignals {
        LinguisticSignals {
            affirmation,
            neutrality,
            commitment,
            verbosity_ratio,
            adversarial,
            specificity,
        }
    }

    #[test]
    fn perfect_signals_score_one() {
        let perfect = signals(1.0, 0.0, 1.0, 10.0, 0.0, 1.0);
        let score = enhanced_score(&perfect, &FusionWeights::default(), 300.0);
        assert!((score - 1.0).abs() < 1e-6, "got {}", score);
    }

    #[test]
    fn empty_response_signals_fall_below_conditional() {
        // Affirmation, commitment share, specificity all zero; verbosity at
        // the sentinel forfeits its share.
        let empty = signals(0.0, 0.0, 0.2, 999.0, 0.0, 0.0);
        let score = enhanced_score(&empty, &FusionWeights::default(), 300.0);
        assert!((score - 0.39).abs() < 1e-6, "got {}", score);
        assert!(score < 0.45);
    }

    #[test]
    fn out_of_range_inputs_are_clamped_before_fusion() {
        let wild = signals(1.7, -0.4, 2.0, 0.0, -1.0, 3.0);
        let score = enhanced_score(&wild, &FusionWeights::default(), 300.0);
        assert!((0.0..=1.0).contains(&score));
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn adversarial_stance_discounts_the_blend() {
        let weights = FusionWeights::default();
        let clean = blended_score(0.8, 0.6, 0.0, &weights);
        let opposed = blended_score(0.8, 0.6, 0.35, &weights);
        let expected = clean * (1.0 - 0.3 * 0.35);
        assert!((opposed - expected).abs() < 1e-6, "got {}", opposed);
    }

    #[test]
    fn blend_mixes_thirty_seventy() {
        let weights = FusionWeights::default();
        let score = blended_score(1.0, 0.0, 0.0, &weights);
        assert!((score - 0.3).abs() < 1e-6);
        let score = blended_score(0.0, 1.0, 0.0, &weights);
        assert!((score - 0.7).abs() < 1e-6);
    }

    #[test]
    fn negative_vector_alignment_is_clamped_to_zero() {
        let weights = FusionWeights::default();
        let score = blended_score(-0.5, 0.5, 0.0, &weights);
        assert!((score - 0.35).abs() < 1e-6);
    }
}
