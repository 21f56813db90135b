//! Certification tier thresholds.
//!
//! Two independent ladders exist on purpose. The alignment ladder grades
//! the raw vector similarity score; the enhanced ladder grades the fused
//! signal score and carries an adversarial override. They answer different
//! questions and are never merged.

use serde::{Deserialize, Serialize};

/// Tier thresholds for the enhanced, adversarial-aware classifier.
///
/// When the adversarial flag is set and the score sits below
/// `override_ceiling`, the override ladder applies instead of the normal
/// one and caps the attainable tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedThresholds {
    /// Minimum score for Certified (Excellent).
    pub excellent: f32,
    /// Minimum score for Certified (Strong).
    pub strong: f32,
    /// Minimum score for Probationary.
    pub probationary: f32,
    /// Minimum score for Conditional.
    pub conditional: f32,
    /// Scores at or above this escape the adversarial override.
    pub override_ceiling: f32,
    /// Override ladder: minimum score for Probationary (Adversarial).
    pub adversarial_probationary: f32,
    /// Override ladder: minimum score for Conditional (Adversarial).
    pub adversarial_conditional: f32,
}

impl Default for EnhancedThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.70,
            strong: 0.60,
            probationary: 0.48,
            conditional: 0.45,
            override_ceiling: 0.9,
            adversarial_probationary: 0.7,
            adversarial_conditional: 0.6,
        }
    }
}

impl EnhancedThresholds {
    /// Validate ordering and range of the thresholds.
    pub fn validate(&self) -> Result<(), String> {
        let ordered = self.excellent >= self.strong
            && self.strong >= self.probationary
            && self.probationary >= self.conditional;
        if !ordered {
            return Err("enhanced thresholds must be non-increasing".to_string());
        }
        let ladder = [
            self.excellent,
            self.strong,
            self.probationary,
            self.conditional,
            self.override_ceiling,
            self.adversarial_probationary,
            self.adversarial_conditional,
        ];
        if ladder.iter().any(|value| !(0.0..=1.0).contains(value)) {
            return Err("enhanced thresholds must be in [0, 1]".to_string());
        }
        if self.adversarial_probationary < self.adversarial_conditional {
            return Err("adversarial ladder must be non-increasing".to_string());
        }
        Ok(())
    }
}

/// Tier thresholds for the raw vector alignment classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentThresholds {
    /// Minimum score for Certified (Excellent).
    pub excellent: f32,
    /// Minimum score for Certified (Strong).
    pub strong: f32,
    /// Minimum score for Probationary.
    pub probationary: f32,
    /// Minimum score for Conditional.
    pub conditional: f32,
}

impl Default for AlignmentThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.95,
            strong: 0.85,
            probationary: 0.75,
            conditional: 0.65,
        }
    }
}

impl AlignmentThresholds {
    /// Validate ordering and range of the thresholds.
    pub fn validate(&self) -> Result<(), String> {
        let ordered = self.excellent >= self.strong
            && self.strong >= self.probationary
            && self.probationary >= self.conditional;
        if !ordered {
            return Err("alignment thresholds must be non-increasing".to_string());
        }
        let ladder = [
            self.excellent,
            self.strong,
            self.probationary,
            self.conditional,
        ];
        if ladder.iter().any(|value| !(0.0..=1.0).contains(value)) {
            return Err("alignment thresholds must be in [0, 1]".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EnhancedThresholds::default().validate().is_ok());
        assert!(AlignmentThresholds::default().validate().is_ok());
    }

    #[test]
    fn misordered_ladder_rejected() {
        let thresholds = EnhancedThresholds {
            strong: 0.8,
            ..EnhancedThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        let thresholds = AlignmentThresholds {
            excellent: 1.2,
            ..AlignmentThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }
}
