//! End-to-end certification pipeline.

use tracing::info;

use trust_chain_analysis::{analyze_core_commitment, detect_indicators, LinguisticSignals};
use trust_chain_core::{CertificationConfig, CertificationStatus, CertificationVerdict};
use trust_chain_corpus::{PrincipleCorpus, ResponseSet};
use trust_chain_embeddings::{EmbeddingProvider, PassageStore};

use crate::alignment::{apply_validity_attenuation, AlignmentCalculator};
use crate::classifier::{classify_alignment, classify_enhanced};
use crate::error::{CertError, CertResult};
use crate::fusion::{blended_score, enhanced_score};
use crate::report::{build_explanation, CertificationReport, EnhancedSummary};
use crate::validator::PassageValidator;

/// Everything a certification run produces.
#[derive(Debug, Clone)]
pub struct CertificationOutcome {
    /// The persisted result record.
    pub report: CertificationReport,
    /// The final verdict with explanation lines.
    pub verdict: CertificationVerdict,
    /// Raw alignment ladder tier for the attenuated vector score.
    pub alignment_status: CertificationStatus,
    /// Enhanced ladder tier.
    pub enhanced_status: CertificationStatus,
    /// Blend head output: vector alignment and commitment under the
    /// adversarial penalty.
    pub blended_score: f32,
}

/// Runs the full scoring pipeline against a loaded corpus.
pub struct CertificationEngine<'a> {
    provider: &'a dyn EmbeddingProvider,
    config: CertificationConfig,
}

impl<'a> CertificationEngine<'a> {
    /// Create an engine, rejecting an invalid configuration up front.
    pub fn new(
        provider: &'a dyn EmbeddingProvider,
        config: CertificationConfig,
    ) -> CertResult<Self> {
        config.validate().map_err(CertError::Config)?;
        Ok(Self { provider, config })
    }

    /// Score a response set against the corpus and classify the result.
    ///
    /// `store` is the optional reference passage store; when absent the
    /// passage validation degrades to zero and the run proceeds.
    pub fn certify(
        &self,
        corpus: &PrincipleCorpus,
        responses: &ResponseSet,
        store: Option<&PassageStore>,
    ) -> CertResult<CertificationOutcome> {
        let candidate = responses.combined.as_str();

        let calculator = AlignmentCalculator::new(self.provider, self.config.chain.clone());
        let alignment = calculator.compute(corpus, candidate)?;

        let attenuated = apply_validity_attenuation(
            alignment.overall,
            &responses.validity,
            &self.config.validity,
        );

        let passage_score = store.map(|store| {
            let validator = PassageValidator::new(self.provider, self.config.passage.clone());
            validator.theological_alignment(store, candidate)
        });

        let commitment = analyze_core_commitment(candidate, passage_score);
        let indicators = detect_indicators(candidate, &self.config.adversarial);
        let signals = LinguisticSignals::extract(candidate, &self.config.adversarial);

        let enhanced = enhanced_score(
            &signals,
            &self.config.fusion,
            self.config.adversarial.verbosity_threshold,
        );
        let blended = blended_score(
            attenuated,
            commitment.overall,
            signals.adversarial,
            &self.config.fusion,
        );

        let alignment_status = classify_alignment(attenuated, &self.config.alignment_thresholds);
        let enhanced_status = classify_enhanced(
            enhanced,
            indicators.likely_adversarial,
            &self.config.enhanced_thresholds,
        );

        let mut report = CertificationReport::from_alignment(&alignment, attenuated);
        report.enhanced = Some(EnhancedSummary {
            score: enhanced,
            status: enhanced_status,
        });
        report.commitment_analysis = Some(commitment);
        report.adversarial_detection = Some(indicators.clone());
        report.response_validity = Some(responses.validity.clone());

        let explanation = build_explanation(
            &report,
            &signals,
            enhanced,
            &self.config.enhanced_thresholds,
            self.config.adversarial.verbosity_threshold,
        );

        let verdict = CertificationVerdict {
            overall_score: enhanced,
            tier: enhanced_status,
            adversarial_flag: indicators.likely_adversarial,
            explanation,
        };

        info!(
            alignment = attenuated,
            enhanced,
            blended,
            alignment_status = %alignment_status,
            enhanced_status = %enhanced_status,
            "certification run complete"
        );

        Ok(CertificationOutcome {
            report,
            verdict,
            alignment_status,
            enhanced_status,
            blended_score: blended,
        })
    }
}
