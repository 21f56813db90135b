//! Signal fusion weights.

use serde::{Deserialize, Serialize};

/// Weights for both fusion heads.
///
/// The enhanced head combines six linguistic signals into one score:
///
/// ```text
/// enhanced = affirmation        * 0.30
///          + (1 - neutrality)   * 0.20
///          + commitment         * 0.20
///          + (1 - verbosity)    * 0.05
///          + (1 - adversarial)  * 0.15
///          + specificity        * 0.10
/// ```
///
/// The blend head mixes the raw vector alignment score with the commitment
/// analysis and applies an adversarial penalty multiplier:
///
/// ```text
/// blended = (vector * 0.3 + commitment * 0.7) * (1 - 0.3 * adversarial)
/// ```
///
/// Both heads clamp their output into `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionWeights {
    /// Weight of the direct affirmation signal.
    pub affirmation: f32,
    /// Weight of the inverted neutrality signal.
    pub neutrality: f32,
    /// Weight of the composite commitment signal.
    pub commitment: f32,
    /// Weight of the inverted verbosity flag.
    pub verbosity: f32,
    /// Weight of the inverted adversarial stance signal.
    pub adversarial: f32,
    /// Weight of the theological specificity signal.
    pub specificity: f32,

    /// Blend head: share of the raw vector alignment score.
    pub blend_vector: f32,
    /// Blend head: share of the commitment analysis score.
    pub blend_commitment: f32,
    /// Blend head: adversarial penalty factor.
    pub blend_adversarial_penalty: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            affirmation: 0.30,
            neutrality: 0.20,
            commitment: 0.20,
            verbosity: 0.05,
            adversarial: 0.15,
            specificity: 0.10,
            blend_vector: 0.3,
            blend_commitment: 0.7,
            blend_adversarial_penalty: 0.3,
        }
    }
}

impl FusionWeights {
    /// Validate the fusion weights.
    pub fn validate(&self) -> Result<(), String> {
        let enhanced_sum = self.affirmation
            + self.neutrality
            + self.commitment
            + self.verbosity
            + self.adversarial
            + self.specificity;
        if (enhanced_sum - 1.0).abs() > 1e-4 {
            return Err(format!(
                "enhanced head weights must sum to 1.0, got {}",
                enhanced_sum
            ));
        }
        let blend_sum = self.blend_vector + self.blend_commitment;
        if (blend_sum - 1.0).abs() > 1e-4 {
            return Err(format!(
                "blend head weights must sum to 1.0, got {}",
                blend_sum
            ));
        }
        if !(0.0..=1.0).contains(&self.blend_adversarial_penalty) {
            return Err(format!(
                "blend_adversarial_penalty must be in [0, 1], got {}",
                self.blend_adversarial_penalty
            ));
        }
        Ok(())
    }
}
