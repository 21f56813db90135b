//! Chain weight derivation settings.

use serde::{Deserialize, Serialize};

/// Settings for deriving a node's weight from its chain number.
///
/// Earlier chains carry more weight: `weight = 1 / (1 + decay * (n - 1))`
/// for chain number `n`, so `tc-1` weighs 1.0 and weights fall off for
/// higher-numbered chains. Chains without a parseable number get
/// `fallback_weight`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainWeightConfig {
    /// Per-chain decay factor. Range: `[0.0, 1.0]`
    pub decay: f32,
    /// Weight used when the chain number cannot be parsed.
    pub fallback_weight: f32,
}

impl Default for ChainWeightConfig {
    fn default() -> Self {
        Self {
            decay: 0.2,
            fallback_weight: 1.0,
        }
    }
}

impl ChainWeightConfig {
    /// Weight for the given chain number (1-based).
    #[inline]
    pub fn weight_for(&self, chain_number: u32) -> f32 {
        1.0 / (1.0 + self.decay * (chain_number.saturating_sub(1)) as f32)
    }

    /// Validate the chain weight configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(format!("decay must be in [0, 1], got {}", self.decay));
        }
        if !(0.0..=1.0).contains(&self.fallback_weight) || self.fallback_weight == 0.0 {
            return Err(format!(
                "fallback_weight must be in (0, 1], got {}",
                self.fallback_weight
            ));
        }
        Ok(())
    }
}
