//! Response validity attenuation settings.

use serde::{Deserialize, Serialize};

/// Settings for judging and attenuating a questionnaire response set.
///
/// Invalid responses never abort a run; instead the overall alignment
/// score is multiplied down and capped. Placeholder attenuation wins over
/// sparse-response attenuation when both apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidityConfig {
    /// Character length under which a response counts as short.
    pub short_response_len: usize,
    /// Short responses at or above this count invalidate the set.
    pub max_short_responses: usize,
    /// Response count under which sparse attenuation applies.
    pub min_responses: usize,
    /// Multiplier when placeholder responses are present.
    pub placeholder_factor: f32,
    /// Ceiling on the attenuated score when placeholders are present.
    pub placeholder_cap: f32,
    /// Multiplier when fewer than `min_responses` responses exist.
    pub sparse_factor: f32,
    /// Ceiling on the attenuated score for sparse response sets.
    pub sparse_cap: f32,
}

impl Default for ValidityConfig {
    fn default() -> Self {
        Self {
            short_response_len: 20,
            max_short_responses: 5,
            min_responses: 5,
            placeholder_factor: 0.5,
            placeholder_cap: 0.5,
            sparse_factor: 0.7,
            sparse_cap: 0.7,
        }
    }
}

impl ValidityConfig {
    /// Validate the validity configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("placeholder_factor", self.placeholder_factor),
            ("placeholder_cap", self.placeholder_cap),
            ("sparse_factor", self.sparse_factor),
            ("sparse_cap", self.sparse_cap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        if self.short_response_len == 0 {
            return Err("short_response_len must be > 0".to_string());
        }
        Ok(())
    }
}
