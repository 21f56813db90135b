//! Core data types for principle corpora and certification results.

mod registry;
mod status;

pub use registry::RegistryEntry;
pub use status::{CertificationStatus, CertificationVerdict};

use serde::{Deserialize, Serialize};

/// Identifier of one principle node: the chain it belongs to plus its
/// section id within that chain.
///
/// The chain id is the stem of the document the node was parsed from
/// (for example `tc-3-stewardship`); the link id is the section heading id
/// (for example `2.1`). Rendered as `tc-3-stewardship:2.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrincipleId {
    /// Chain identifier, normally of the form `tc-<n>` or `tc-<n>-<slug>`.
    pub chain: String,
    /// Section id inside the chain, dotted or integer (`3`, `2.1`).
    pub link: String,
}

impl PrincipleId {
    pub fn new(chain: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            link: link.into(),
        }
    }

    /// Parse the chain number from a `tc-<n>` prefix.
    ///
    /// Returns `None` when the chain id does not carry a parseable number;
    /// callers fall back to a weight of 1.0 in that case.
    pub fn chain_number(&self) -> Option<u32> {
        let rest = self.chain.strip_prefix("tc-")?;
        let digits: &str = {
            let end = rest
                .char_indices()
                .find(|(_, c)| !c.is_ascii_digit())
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            &rest[..end]
        };
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }
}

impl std::fmt::Display for PrincipleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chain, self.link)
    }
}

/// A reference passage cited inside a principle node body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Canonical reference, for example `John 3:16`.
    pub reference: String,
    /// Quoted excerpt text.
    pub excerpt: String,
}

/// One addressable unit of declared doctrine.
///
/// Body text has citation blocks stripped and whitespace collapsed; the
/// citations are carried separately in document order. Nodes are immutable
/// once a corpus is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipleNode {
    pub id: PrincipleId,
    /// Cleaned body text with citation blocks removed.
    pub body: String,
    /// Citations in the order they appeared in the body.
    pub citations: Vec<Citation>,
}

impl PrincipleNode {
    /// Context text used for embedding: the body followed by each citation
    /// on its own line, prefixed by its reference.
    pub fn context_text(&self) -> String {
        let mut context = self.body.clone();
        for citation in &self.citations {
            context.push('\n');
            context.push_str(&citation.reference);
            context.push_str(": ");
            context.push_str(&citation.excerpt);
        }
        context
    }
}

/// Per-node similarity contribution to the overall alignment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentVector {
    /// Chain id the node belongs to.
    pub tc: String,
    /// Section id within the chain.
    pub link: String,
    /// Cosine similarity between node context and candidate text, in `[-1, 1]`.
    pub value: f32,
    /// Chain-derived weight in `(0, 1]`.
    pub weight: f32,
}

/// A named scalar produced by one linguistic extractor.
///
/// Values are clamped to `[0, 1]` at construction. The verbosity ratio is
/// not represented as a `SignalScore` because it is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalScore {
    pub name: String,
    pub value: f32,
}

impl SignalScore {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value: value.clamp(0.0, 1.0),
        }
    }
}

/// Validity analysis of an extracted questionnaire response set.
///
/// Invalid responses do not abort a run; the overall score is attenuated
/// and this record travels with the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseValidity {
    /// Placeholder markers found in place of answers.
    pub placeholder_count: usize,
    /// Numbered questions that carried an actual answer.
    pub question_count: usize,
    /// Non-empty responses extracted.
    pub total_responses: usize,
    /// Responses under the short-answer length floor.
    pub short_responses: usize,
    /// Total character length of the combined response text.
    pub response_length: usize,
    /// Whether the response set is usable without attenuation.
    pub is_valid: bool,
}
