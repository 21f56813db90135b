//! Certification tier classification.

use trust_chain_core::config::{AlignmentThresholds, EnhancedThresholds};
use trust_chain_core::CertificationStatus;

/// Classify a raw vector alignment score.
///
/// Thresholds are evaluated top-down, first match wins. No adversarial
/// override exists on this ladder.
pub fn classify_alignment(score: f32, thresholds: &AlignmentThresholds) -> CertificationStatus {
    if score >= thresholds.excellent {
        CertificationStatus::CertifiedExcellent
    } else if score >= thresholds.strong {
        CertificationStatus::CertifiedStrong
    } else if score >= thresholds.probationary {
        CertificationStatus::Probationary
    } else if score >= thresholds.conditional {
        CertificationStatus::Conditional
    } else {
        CertificationStatus::NotCertified
    }
}

/// Classify an enhanced score under the adversarial override.
///
/// When adversarial patterns were detected and the score sits below the
/// override ceiling, the override ladder caps the attainable tier. The
/// ladders intentionally differ from the raw alignment thresholds.
pub fn classify_enhanced(
    score: f32,
    adversarial_detected: bool,
    thresholds: &EnhancedThresholds,
) -> CertificationStatus {
    if adversarial_detected && score < thresholds.override_ceiling {
        return if score >= thresholds.adversarial_probationary {
            CertificationStatus::ProbationaryAdversarial
        } else if score >= thresholds.adversarial_conditional {
            CertificationStatus::ConditionalAdversarial
        } else {
            CertificationStatus::NotCertifiedAdversarial
        };
    }

    if score >= thresholds.excellent {
        CertificationStatus::CertifiedExcellent
    } else if score >= thresholds.strong {
        CertificationStatus::CertifiedStrong
    } else if score >= thresholds.probationary {
        CertificationStatus::Probationary
    } else if score >= thresholds.conditional {
        CertificationStatus::Conditional
    } else {
        CertificationStatus::NotCertified
    }
}
