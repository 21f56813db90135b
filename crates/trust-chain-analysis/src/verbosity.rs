//! Verbosity measurement.
//!
//! The verbosity ratio is total word count divided by the number of
//! distinct domain terms present. It is deliberately unbounded; consumers
//! compare it against their own threshold. Text with no domain terms at
//! all gets the sentinel maximum.

use crate::lexicon::core_terms_present;
use crate::tokens::word_count;

/// Ratio reported when a text contains no domain terms.
pub const VERBOSITY_SENTINEL: f32 = 999.0;

/// Words per distinct domain term, or [`VERBOSITY_SENTINEL`] when no
/// domain term occurs.
pub fn verbosity_ratio(response: &str) -> f32 {
    let terms = core_terms_present(response);
    if terms == 0 {
        return VERBOSITY_SENTINEL;
    }
    word_count(response) as f32 / terms as f32
}

/// Distinct domain terms per 1000 words.
pub fn domain_term_density(response: &str) -> f32 {
    let words = word_count(response).max(1);
    core_terms_present(response) as f32 / words as f32 * 1000.0
}

/// Domain-term density scaled into `[0, 1]` for the composite commitment
/// signal: terms over words, times 50, capped.
pub fn domain_density_score(response: &str) -> f32 {
    let words = word_count(response);
    if words == 0 {
        return 0.0;
    }
    let density = core_terms_present(response) as f32 / words as f32;
    (density * 50.0).min(1.0)
}
