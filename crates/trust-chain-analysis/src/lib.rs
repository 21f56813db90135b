//! Linguistic signal extractors.
//!
//! Every extractor here is a pure, total function of response text to a
//! scalar: no embedding calls, no I/O, no hidden state. Running an
//! extractor twice on identical text yields bit-identical scores. The
//! extractors are independent of one another; fusing their outputs into a
//! certification decision happens downstream.
//!
//! # Signals
//!
//! - [`affirmation`]: first-person commitment phrasing and principle-term
//!   overlap
//! - [`neutrality`]: hedging and distancing language
//! - [`verbosity`]: words per domain term, unbounded and thresholded
//! - [`depth`]: weighted vocabulary tiers plus complex-reasoning patterns
//! - [`adversarial`]: rule-based stance accumulator and the surface
//!   indicator battery
//! - [`references`]: scripture-style reference extraction and density
//! - [`concepts`]: weighted positive and negative concept lexicons
//! - [`commitment`]: per-principle and composite commitment analysis

pub mod adversarial;
pub mod affirmation;
pub mod commitment;
pub mod concepts;
pub mod depth;
pub mod lexicon;
pub mod neutrality;
pub mod patterns;
pub mod references;
pub mod signals;
pub mod tokens;
pub mod verbosity;

pub use adversarial::{adversarial_stance, detect_indicators, AdversarialIndicators};
pub use affirmation::{affirmation_pattern_score, direct_affirmation};
pub use commitment::{analyze_core_commitment, composite_commitment, CommitmentAnalysis};
pub use concepts::concept_score;
pub use depth::theological_depth;
pub use neutrality::neutrality_score;
pub use references::{extract_references, reference_density};
pub use signals::LinguisticSignals;
pub use verbosity::{verbosity_ratio, VERBOSITY_SENTINEL};
