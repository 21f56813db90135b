//! Alignment scoring, score fusion and certification classification.
//!
//! The scoring pipeline runs one way: principle corpus and response text
//! go in, a fused score and a discrete certification tier come out.
//!
//! Two classifiers are exposed deliberately. The raw alignment ladder
//! grades semantic similarity alone; the enhanced ladder grades the fused
//! commitment-aware score and applies the adversarial override. They
//! answer different questions and are never merged.
//!
//! # Pipeline
//!
//! 1. [`AlignmentCalculator`] embeds each principle's context and the
//!    candidate once, producing per-node similarity vectors and their
//!    weighted mean
//! 2. the response validity record attenuates the overall score when
//!    placeholders or sparse answers were detected
//! 3. the linguistic extractors produce the signal bundle
//! 4. [`PassageValidator`] matches the candidate against the reference
//!    passage store, degrading softly when the store is missing
//! 5. the fusion heads combine everything into the enhanced and blended
//!    scores
//! 6. the classifiers map scores to certification tiers and the report is
//!    assembled

pub mod alignment;
pub mod certify;
pub mod classifier;
pub mod error;
pub mod fusion;
pub mod report;
pub mod validator;

pub use alignment::{
    apply_validity_attenuation, weighted_mean, AlignmentCalculator, AlignmentOutcome,
};
pub use certify::{CertificationEngine, CertificationOutcome};
pub use classifier::{classify_alignment, classify_enhanced};
pub use error::{CertError, CertResult};
pub use fusion::{blended_score, enhanced_score};
pub use report::{CertificationReport, EnhancedSummary};
pub use validator::{PassageMatch, PassageValidation, PassageValidator};
