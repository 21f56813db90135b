//! Adversarial stance detection settings.

use serde::{Deserialize, Serialize};

/// Weights for the stance accumulator and thresholds for the indicator
/// battery.
///
/// The stance accumulator adds a fixed amount per matched pattern family
/// and subtracts credit for explicit affirmations; the final value is
/// clamped into `[0, 1]`. The indicator battery thresholds four
/// surface-level statistics into booleans averaged to an indicator score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversarialConfig {
    /// Added per strong opposition pattern hit.
    pub strong_opposition_weight: f32,
    /// Added per moderate, agnostic-leaning opposition hit.
    pub moderate_opposition_weight: f32,
    /// Added per noncommittal framing hit.
    pub noncommittal_weight: f32,
    /// Subtracted per explicit affirmation pattern hit.
    pub affirmation_credit: f32,
    /// Added per qualified, framework-relative statement hit.
    pub qualified_statement_weight: f32,
    /// Added per distinct atheist self-identification term.
    pub atheist_term_weight: f32,
    /// Added per distinct agnostic self-identification term.
    pub agnostic_term_weight: f32,
    /// Added per pattern that advocates rejecting belief.
    pub rejection_advocacy_weight: f32,

    /// Verbosity ratio above which the verbosity indicator fires.
    pub verbosity_threshold: f32,
    /// Neutrality score above which the neutrality indicator fires.
    pub neutrality_threshold: f32,
    /// Domain-term density (per 1000 words) below which the density
    /// indicator fires.
    pub density_threshold: f32,
    /// Third-to-first person ratio above which the stance indicator fires.
    pub stance_ratio_threshold: f32,
    /// Indicator score above which the run is flagged likely adversarial.
    pub indicator_threshold: f32,
}

impl Default for AdversarialConfig {
    fn default() -> Self {
        Self {
            strong_opposition_weight: 0.35,
            moderate_opposition_weight: 0.18,
            noncommittal_weight: 0.10,
            affirmation_credit: 0.25,
            qualified_statement_weight: 0.12,
            atheist_term_weight: 0.20,
            agnostic_term_weight: 0.15,
            rejection_advocacy_weight: 0.40,
            verbosity_threshold: 300.0,
            neutrality_threshold: 0.6,
            density_threshold: 3.0,
            stance_ratio_threshold: 1.0,
            indicator_threshold: 0.5,
        }
    }
}

impl AdversarialConfig {
    /// Validate the adversarial configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("strong_opposition_weight", self.strong_opposition_weight),
            ("moderate_opposition_weight", self.moderate_opposition_weight),
            ("noncommittal_weight", self.noncommittal_weight),
            ("affirmation_credit", self.affirmation_credit),
            ("qualified_statement_weight", self.qualified_statement_weight),
            ("atheist_term_weight", self.atheist_term_weight),
            ("agnostic_term_weight", self.agnostic_term_weight),
            ("rejection_advocacy_weight", self.rejection_advocacy_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        if self.verbosity_threshold <= 0.0 {
            return Err(format!(
                "verbosity_threshold must be > 0, got {}",
                self.verbosity_threshold
            ));
        }
        if !(0.0..=1.0).contains(&self.neutrality_threshold) {
            return Err(format!(
                "neutrality_threshold must be in [0, 1], got {}",
                self.neutrality_threshold
            ));
        }
        if self.density_threshold < 0.0 {
            return Err(format!(
                "density_threshold must be >= 0, got {}",
                self.density_threshold
            ));
        }
        if self.stance_ratio_threshold < 0.0 {
            return Err(format!(
                "stance_ratio_threshold must be >= 0, got {}",
                self.stance_ratio_threshold
            ));
        }
        if !(0.0..=1.0).contains(&self.indicator_threshold) {
            return Err(format!(
                "indicator_threshold must be in [0, 1], got {}",
                self.indicator_threshold
            ));
        }
        Ok(())
    }
}
