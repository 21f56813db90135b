//! Adversarial pattern detection.
//!
//! Two complementary detectors:
//!
//! - [`adversarial_stance`]: a signed accumulator over the pattern
//!   families, clamped into `[0, 1]`. Strong opposition weighs most,
//!   explicit affirmations subtract credit, advocacy of rejecting belief
//!   carries a heavy penalty.
//! - [`detect_indicators`]: four surface statistics thresholded into
//!   booleans and averaged. This is the flag the certification override
//!   consumes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use trust_chain_core::config::AdversarialConfig;

use crate::neutrality::neutrality_score;
use crate::patterns::{adversarial_patterns, signal_patterns};
use crate::verbosity::{domain_term_density, verbosity_ratio};

/// Stance ratio reported when no first-person stance marker occurs.
const STANCE_SENTINEL: f32 = 999.0;

/// Score opposition to the declared principles, in `[0, 1]`.
///
/// Every pattern in every family is evaluated; nothing short-circuits.
/// The accumulator may go negative when affirmation credits outweigh the
/// penalties; only the clamped value is observable.
pub fn adversarial_stance(response: &str, config: &AdversarialConfig) -> f32 {
    let patterns = adversarial_patterns();
    let mut score = 0.0f32;

    for pattern in &patterns.strong_opposition {
        if pattern.is_match(response) {
            score += config.strong_opposition_weight;
        }
    }
    for pattern in &patterns.moderate_opposition {
        if pattern.is_match(response) {
            score += config.moderate_opposition_weight;
        }
    }
    for pattern in &patterns.noncommittal {
        if pattern.is_match(response) {
            score += config.noncommittal_weight;
        }
    }
    for pattern in &patterns.affirmations {
        if pattern.is_match(response) {
            score -= config.affirmation_credit;
        }
    }
    for pattern in &patterns.qualified {
        if pattern.is_match(response) {
            score += config.qualified_statement_weight;
        }
    }
    for pattern in &patterns.atheist_terms {
        if pattern.is_match(response) {
            score += config.atheist_term_weight;
        }
    }
    for pattern in &patterns.agnostic_terms {
        if pattern.is_match(response) {
            score += config.agnostic_term_weight;
        }
    }
    for pattern in &patterns.rejection_advocacy {
        if pattern.is_match(response) {
            score += config.rejection_advocacy_weight;
        }
    }

    score.clamp(0.0, 1.0)
}

/// Surface statistics thresholded into the adversarial indicator battery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdversarialIndicators {
    /// Words per distinct domain term.
    pub verbosity_ratio: f32,
    /// Verbosity ratio above the threshold.
    pub excessive_verbosity: bool,
    /// Neutral language score in `[0, 1]`.
    pub neutral_language_score: f32,
    /// Neutrality above the threshold.
    pub high_neutrality: bool,
    /// Distinct domain terms per 1000 words.
    pub theological_term_density: f32,
    /// Density below the threshold.
    pub low_theological_density: bool,
    /// Third-person to first-person stance marker ratio.
    pub third_to_first_person_ratio: f32,
    /// Stance ratio above the threshold.
    pub high_third_person: bool,
    /// Fired indicators divided by four.
    pub adversarial_score: f32,
    /// Indicator score above the flag threshold.
    pub likely_adversarial: bool,
}

/// Run the indicator battery over the combined response text.
pub fn detect_indicators(response: &str, config: &AdversarialConfig) -> AdversarialIndicators {
    let verbosity = verbosity_ratio(response);
    let excessive_verbosity = verbosity > config.verbosity_threshold;

    let neutrality = neutrality_score(response);
    let high_neutrality = neutrality > config.neutrality_threshold;

    let density = domain_term_density(response);
    let low_theological_density = density < config.density_threshold;

    let patterns = signal_patterns();
    let first_person = patterns.first_person_stance.find_iter(response).count();
    let third_person = patterns.third_person_stance.find_iter(response).count();
    let stance_ratio = if first_person > 0 {
        third_person as f32 / first_person as f32
    } else {
        STANCE_SENTINEL
    };
    let high_third_person = stance_ratio > config.stance_ratio_threshold;

    let fired = [
        excessive_verbosity,
        high_neutrality,
        low_theological_density,
        high_third_person,
    ]
    .iter()
    .filter(|indicator| **indicator)
    .count();
    let adversarial_score = fired as f32 / 4.0;
    let likely_adversarial = adversarial_score > config.indicator_threshold;

    if likely_adversarial {
        debug!(
            verbosity,
            neutrality, density, stance_ratio, "adversarial indicators fired"
        );
    }

    AdversarialIndicators {
        verbosity_ratio: verbosity,
        excessive_verbosity,
        neutral_language_score: neutrality,
        high_neutrality,
        theological_term_density: density,
        low_theological_density,
        third_to_first_person_ratio: stance_ratio,
        high_third_person,
        adversarial_score,
        likely_adversarial,
    }
}
