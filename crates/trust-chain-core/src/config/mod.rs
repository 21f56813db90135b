//! Configuration types for the certification engine.
//!
//! Every subsystem reads its constants from one of these structs. The
//! defaults carry the fixed scoring constants; they are named values, not
//! tunables discovered at runtime. `validate()` exists so that a
//! deserialized configuration can be rejected before a run starts.

mod adversarial;
mod chain;
mod fusion;
mod passage;
mod thresholds;
mod validity;

pub use adversarial::AdversarialConfig;
pub use chain::ChainWeightConfig;
pub use fusion::FusionWeights;
pub use passage::PassageValidationConfig;
pub use thresholds::{AlignmentThresholds, EnhancedThresholds};
pub use validity::ValidityConfig;

use serde::{Deserialize, Serialize};

/// Aggregate configuration for a certification run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationConfig {
    /// Chain weight derivation.
    pub chain: ChainWeightConfig,
    /// Signal fusion weights for both fusion heads.
    pub fusion: FusionWeights,
    /// Adversarial stance pattern weights and indicator thresholds.
    pub adversarial: AdversarialConfig,
    /// Reference passage validation settings.
    pub passage: PassageValidationConfig,
    /// Response validity attenuation settings.
    pub validity: ValidityConfig,
    /// Tier thresholds for the enhanced classifier.
    pub enhanced_thresholds: EnhancedThresholds,
    /// Tier thresholds for the raw alignment classifier.
    pub alignment_thresholds: AlignmentThresholds,
}

impl CertificationConfig {
    /// Validate every subsystem configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.chain.validate()?;
        self.fusion.validate()?;
        self.adversarial.validate()?;
        self.passage.validate()?;
        self.validity.validate()?;
        self.enhanced_thresholds.validate()?;
        self.alignment_thresholds.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(CertificationConfig::default().validate().is_ok());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CertificationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CertificationConfig = serde_json::from_str(&json).unwrap();
        assert!(back.validate().is_ok());
        assert_eq!(back.fusion.affirmation, config.fusion.affirmation);
    }
}
