//! Signal bundle for fusion.

use serde::{Deserialize, Serialize};

use trust_chain_core::config::AdversarialConfig;
use trust_chain_core::SignalScore;

use crate::adversarial::adversarial_stance;
use crate::affirmation::direct_affirmation;
use crate::commitment::composite_commitment;
use crate::depth::theological_depth;
use crate::lexicon::CORE_PRINCIPLES;
use crate::neutrality::neutrality_score;
use crate::verbosity::verbosity_ratio;

/// The extractor outputs consumed by the enhanced fusion head.
///
/// All fields except `verbosity_ratio` are in `[0, 1]`; the ratio is
/// unbounded and thresholded by the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticSignals {
    /// Direct affirmation, averaged across the core principles.
    pub affirmation: f32,
    /// Neutral and distancing language.
    pub neutrality: f32,
    /// Composite commitment.
    pub commitment: f32,
    /// Words per distinct domain term, unbounded.
    pub verbosity_ratio: f32,
    /// Adversarial stance accumulator, clamped.
    pub adversarial: f32,
    /// Theological specificity and depth.
    pub specificity: f32,
}

impl LinguisticSignals {
    /// Run every extractor over the combined response text.
    pub fn extract(response: &str, config: &AdversarialConfig) -> Self {
        let affirmation = CORE_PRINCIPLES
            .iter()
            .map(|principle| direct_affirmation(response, principle))
            .sum::<f32>()
            / CORE_PRINCIPLES.len() as f32;

        Self {
            affirmation,
            neutrality: neutrality_score(response),
            commitment: composite_commitment(response),
            verbosity_ratio: verbosity_ratio(response),
            adversarial: adversarial_stance(response, config),
            specificity: theological_depth(response),
        }
    }

    /// Bounded signals as named scores, for reporting.
    ///
    /// The verbosity ratio is excluded; it is not a `[0, 1]` signal.
    pub fn as_signal_scores(&self) -> Vec<SignalScore> {
        vec![
            SignalScore::new("direct_affirmation", self.affirmation),
            SignalScore::new("neutral_language", self.neutrality),
            SignalScore::new("commitment", self.commitment),
            SignalScore::new("adversarial_stance", self.adversarial),
            SignalScore::new("theological_specificity", self.specificity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbosity::VERBOSITY_SENTINEL;

    fn config() -> AdversarialConfig {
        AdversarialConfig::default()
    }

    #[test]
    fn empty_text_yields_floor_signals() {
        let signals = LinguisticSignals::extract("", &config());
        assert_eq!(signals.affirmation, 0.0);
        assert_eq!(signals.neutrality, 0.0);
        assert_eq!(signals.adversarial, 0.0);
        assert_eq!(signals.specificity, 0.0);
        assert_eq!(signals.verbosity_ratio, VERBOSITY_SENTINEL);
        // Commitment keeps only its non-neutral share on empty text.
        assert!((signals.commitment - 0.2).abs() < 1e-6);
    }

    #[test]
    fn extraction_is_bit_identical_across_runs() {
        let text = "I firmly believe God created all things; Scripture teaches it.";
        let first = LinguisticSignals::extract(text, &config());
        let second = LinguisticSignals::extract(text, &config());
        assert_eq!(first, second);
    }

    #[test]
    fn signal_scores_are_bounded() {
        let text = "I firmly believe God created all things; Scripture teaches it.";
        let signals = LinguisticSignals::extract(text, &config());
        for score in signals.as_signal_scores() {
            assert!((0.0..=1.0).contains(&score.value), "{} out of range", score.name);
        }
    }
}
