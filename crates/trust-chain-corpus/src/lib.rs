//! Principle corpus loading and questionnaire response extraction.
//!
//! Principle documents are markdown files with numbered section headings;
//! each section becomes one [`PrincipleNode`] with its citation
//! blockquotes carried separately from the cleaned body text. A directory
//! load merges every `tc-*.md` document; section ids repeat last-wins.
//!
//! Questionnaire responses arrive as a numbered-answer document; the
//! extractor pulls the answer text and reports a validity record counting
//! placeholders and short answers.
//!
//! [`PrincipleNode`]: trust_chain_core::PrincipleNode

pub mod error;
pub mod loader;
pub mod parser;
pub mod responses;

pub use error::{CorpusError, CorpusResult};
pub use loader::{load_corpus, PrincipleCorpus};
pub use parser::parse_document;
pub use responses::{extract_responses, ResponseSet};
