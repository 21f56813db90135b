//! Reference passage validation settings.

use serde::{Deserialize, Serialize};

/// Settings for matching candidate text against the reference passage
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageValidationConfig {
    /// Minimum bonus-adjusted similarity for a passage to count as a match.
    pub similarity_threshold: f32,
    /// Bonus when the passage text or its reference appears verbatim in
    /// the candidate.
    pub exact_match_bonus: f32,
    /// Bonus per extracted reference mention overlapping the passage's
    /// reference.
    pub reference_mention_bonus: f32,
    /// Weight of the top match when more than one passage matches.
    pub top_match_weight: f32,
    /// Weight of the mean of the remaining matches.
    pub other_matches_weight: f32,
    /// Word count under which the short-text penalty applies.
    pub short_text_words: usize,
    /// Multiplier applied to the overall score for short candidates.
    pub short_text_penalty: f32,
    /// Maximum matches carried in the result, best first.
    pub max_matches: usize,
    /// Match count at which the sqrt dampening saturates.
    pub dampening_match_count: usize,
}

impl Default for PassageValidationConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            exact_match_bonus: 0.2,
            reference_mention_bonus: 0.1,
            top_match_weight: 0.4,
            other_matches_weight: 0.6,
            short_text_words: 10,
            short_text_penalty: 0.8,
            max_matches: 10,
            dampening_match_count: 10,
        }
    }
}

impl PassageValidationConfig {
    /// Validate the passage validation configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            ));
        }
        for (name, value) in [
            ("exact_match_bonus", self.exact_match_bonus),
            ("reference_mention_bonus", self.reference_mention_bonus),
            ("short_text_penalty", self.short_text_penalty),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        let blend = self.top_match_weight + self.other_matches_weight;
        if (blend - 1.0).abs() > 1e-4 {
            return Err(format!(
                "top_match_weight + other_matches_weight must sum to 1.0, got {}",
                blend
            ));
        }
        if self.max_matches == 0 {
            return Err("max_matches must be > 0".to_string());
        }
        if self.dampening_match_count == 0 {
            return Err("dampening_match_count must be > 0".to_string());
        }
        Ok(())
    }
}
