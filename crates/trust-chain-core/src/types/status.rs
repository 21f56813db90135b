//! Certification status tiers and the per-run verdict.

use serde::{Deserialize, Serialize};

/// Discrete certification tier.
///
/// Tiers form a total order from [`NotCertifiedAdversarial`] up to
/// [`CertifiedExcellent`]. The adversarial variants are produced only by
/// the enhanced classifier when its override is active; the raw alignment
/// classifier never emits them.
///
/// [`NotCertifiedAdversarial`]: CertificationStatus::NotCertifiedAdversarial
/// [`CertifiedExcellent`]: CertificationStatus::CertifiedExcellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificationStatus {
    #[serde(rename = "Certified (Excellent)")]
    CertifiedExcellent,
    #[serde(rename = "Certified (Strong)")]
    CertifiedStrong,
    #[serde(rename = "Probationary")]
    Probationary,
    #[serde(rename = "Conditional")]
    Conditional,
    #[serde(rename = "Not Certified")]
    NotCertified,
    #[serde(rename = "Probationary (Adversarial Patterns Detected)")]
    ProbationaryAdversarial,
    #[serde(rename = "Conditional (Adversarial Patterns Detected)")]
    ConditionalAdversarial,
    #[serde(rename = "Not Certified (Adversarial Patterns Detected)")]
    NotCertifiedAdversarial,
}

impl CertificationStatus {
    /// Rank within the total order; higher is better.
    pub fn rank(&self) -> u8 {
        match self {
            CertificationStatus::CertifiedExcellent => 7,
            CertificationStatus::CertifiedStrong => 6,
            CertificationStatus::Probationary => 5,
            CertificationStatus::Conditional => 4,
            CertificationStatus::ProbationaryAdversarial => 3,
            CertificationStatus::ConditionalAdversarial => 2,
            CertificationStatus::NotCertified => 1,
            CertificationStatus::NotCertifiedAdversarial => 0,
        }
    }

    /// Whether this tier grants certification.
    pub fn is_certified(&self) -> bool {
        matches!(
            self,
            CertificationStatus::CertifiedExcellent | CertificationStatus::CertifiedStrong
        )
    }

    /// Whether the adversarial override produced this tier.
    pub fn is_adversarial(&self) -> bool {
        matches!(
            self,
            CertificationStatus::ProbationaryAdversarial
                | CertificationStatus::ConditionalAdversarial
                | CertificationStatus::NotCertifiedAdversarial
        )
    }
}

impl PartialOrd for CertificationStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CertificationStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CertificationStatus::CertifiedExcellent => "Certified (Excellent)",
            CertificationStatus::CertifiedStrong => "Certified (Strong)",
            CertificationStatus::Probationary => "Probationary",
            CertificationStatus::Conditional => "Conditional",
            CertificationStatus::NotCertified => "Not Certified",
            CertificationStatus::ProbationaryAdversarial => {
                "Probationary (Adversarial Patterns Detected)"
            }
            CertificationStatus::ConditionalAdversarial => {
                "Conditional (Adversarial Patterns Detected)"
            }
            CertificationStatus::NotCertifiedAdversarial => {
                "Not Certified (Adversarial Patterns Detected)"
            }
        };
        f.write_str(label)
    }
}

/// The final, immutable outcome of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationVerdict {
    /// Fused overall score, clamped into `[0, 1]`.
    pub overall_score: f32,
    /// Certification tier assigned by the classifier.
    pub tier: CertificationStatus,
    /// Whether adversarial patterns were flagged for this run.
    pub adversarial_flag: bool,
    /// Human-readable explanation lines in presentation order.
    pub explanation: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_registry_labels() {
        assert_eq!(
            CertificationStatus::CertifiedExcellent.to_string(),
            "Certified (Excellent)"
        );
        assert_eq!(
            CertificationStatus::NotCertifiedAdversarial.to_string(),
            "Not Certified (Adversarial Patterns Detected)"
        );
    }

    #[test]
    fn tiers_are_totally_ordered() {
        assert!(CertificationStatus::CertifiedExcellent > CertificationStatus::CertifiedStrong);
        assert!(CertificationStatus::CertifiedStrong > CertificationStatus::Probationary);
        assert!(CertificationStatus::Probationary > CertificationStatus::Conditional);
        assert!(CertificationStatus::Conditional > CertificationStatus::ProbationaryAdversarial);
        assert!(CertificationStatus::NotCertified > CertificationStatus::NotCertifiedAdversarial);
    }

    #[test]
    fn serde_round_trips_display_labels() {
        let json = serde_json::to_string(&CertificationStatus::Probationary).unwrap();
        assert_eq!(json, "\"Probationary\"");
        let back: CertificationStatus =
            serde_json::from_str("\"Certified (Strong)\"").unwrap();
        assert_eq!(back, CertificationStatus::CertifiedStrong);
    }

    #[test]
    fn adversarial_predicates() {
        assert!(CertificationStatus::ConditionalAdversarial.is_adversarial());
        assert!(!CertificationStatus::Conditional.is_adversarial());
        assert!(CertificationStatus::CertifiedStrong.is_certified());
        assert!(!CertificationStatus::ProbationaryAdversarial.is_certified());
    }
}
