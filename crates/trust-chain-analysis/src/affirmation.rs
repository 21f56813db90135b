//! Direct affirmation scoring.

use crate::lexicon::core_terms_present;
use crate::patterns::signal_patterns;
use crate::tokens::{sentences, token_set};

/// Sentence-overlap thresholds: an affirmation-bearing sentence counts as
/// affirming the principle when it shares at least this many tokens with
/// it, or at least this fraction of the principle's token set.
const MIN_COMMON_TOKENS: usize = 2;
const MIN_COMMON_FRACTION: f32 = 0.2;

/// Score the direct affirmation of one principle in a response.
///
/// Combines three observations:
///
/// 1. each matched affirmation pattern adds 1.5
/// 2. each affirmation-bearing sentence whose token set overlaps the
///    principle's adds 2.5
/// 3. distinct domain terms present, divided by 4 and capped at 1.0
///
/// The pattern total is divided by 3 and capped at 1.0, the domain-term
/// factor is capped at 1.0, and the two are blended 0.6/0.4. The result is
/// in `[0, 1]`.
pub fn direct_affirmation(response: &str, principle: &str) -> f32 {
    let patterns = signal_patterns();
    let mut affirmation_score = 0.0f32;

    for pattern in &patterns.affirmation {
        if pattern.is_match(response) {
            affirmation_score += 1.5;
        }
    }

    let principle_terms = token_set(principle);
    for sentence in sentences(response) {
        let affirming = patterns
            .affirmation
            .iter()
            .any(|pattern| pattern.is_match(sentence));
        if !affirming {
            continue;
        }
        let sentence_terms = token_set(sentence);
        let common = principle_terms.intersection(&sentence_terms).count();
        if common >= MIN_COMMON_TOKENS
            || common as f32 >= MIN_COMMON_FRACTION * principle_terms.len() as f32
        {
            affirmation_score += 2.5;
        }
    }

    let pattern_factor = (affirmation_score / 3.0).min(1.0);
    let theological_factor = (core_terms_present(response) as f32 / 4.0).min(1.0);

    (pattern_factor * 0.6 + theological_factor * 0.4).min(1.0)
}

/// Flat affirmation pattern score: 0.2 per matched pattern, capped at 1.0.
///
/// Feeds the composite commitment signal, which weights pattern presence
/// without the principle-overlap analysis.
pub fn affirmation_pattern_score(response: &str) -> f32 {
    let hits = signal_patterns()
        .affirmation
        .iter()
        .filter(|pattern| pattern.is_match(response))
        .count();
    (hits as f32 * 0.2).min(1.0)
}
