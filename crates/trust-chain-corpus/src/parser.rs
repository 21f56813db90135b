//! Principle document parser.
//!
//! Sections look like:
//!
//! ```text
//! ## 2.1 <body text>
//! More body text.
//! > **John 3:16** For God so loved the world
//! ```
//!
//! The heading id is a dotted or integer section id. Citation blockquotes
//! carry a bold reference followed by the excerpt on the same line; they
//! are stripped from the stored body and kept as `(reference, excerpt)`
//! pairs in document order.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use trust_chain_core::{Citation, PrincipleId, PrincipleNode};

/// Compiled parsing patterns, built once.
struct DocumentPatterns {
    section: Regex,
    citation: Regex,
    whitespace: Regex,
}

static DOCUMENT_PATTERNS: OnceLock<DocumentPatterns> = OnceLock::new();

fn patterns() -> &'static DocumentPatterns {
    DOCUMENT_PATTERNS.get_or_init(|| DocumentPatterns {
        // Heading with a dotted or integer section id; body runs to the
        // next heading marker.
        section: Regex::new(r"(?m)^#{2,}\s*(\d+(?:\.\d+)?)\s+([^#]+)")
            .expect("section regex must compile"),
        citation: Regex::new(r"(?m)^>\s*\*\*([^*]+)\*\*\s*([^\n]+)")
            .expect("citation regex must compile"),
        whitespace: Regex::new(r"\s+").expect("whitespace regex must compile"),
    })
}

/// Parse one principle document into nodes keyed by `chain:section` id.
///
/// Duplicate section ids within a document overwrite, last-wins. A
/// document with no matching sections parses to an empty map.
pub fn parse_document(chain_id: &str, content: &str) -> BTreeMap<String, PrincipleNode> {
    let patterns = patterns();
    let mut nodes = BTreeMap::new();

    for section in patterns.section.captures_iter(content) {
        let link_id = section[1].trim().to_string();
        let raw_body = section[2].trim();

        let citations: Vec<Citation> = patterns
            .citation
            .captures_iter(raw_body)
            .map(|citation| Citation {
                reference: citation[1].trim().to_string(),
                excerpt: citation[2].trim().to_string(),
            })
            .collect();

        // Citation lines are dropped from the body so the context text does
        // not duplicate them.
        let stripped = patterns.citation.replace_all(raw_body, "");
        let body = patterns
            .whitespace
            .replace_all(stripped.trim(), " ")
            .into_owned();

        let id = PrincipleId::new(chain_id, link_id);
        nodes.insert(
            id.to_string(),
            PrincipleNode {
                id,
                body,
                citations,
            },
        );
    }

    debug!(chain = chain_id, nodes = nodes.len(), "parsed principle document");
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
# Chain One

## 1.1 God is the source of all being and goodness.
All creation flows from the creator.
> **Genesis 1:1** In the beginning God created the heavens and the earth.
> **John 1:3** All things were made through him.

## 1.2 Humans are created in God's image.
Every person carries inherent dignity.

## 3 Technology must serve divine purposes.
";

    #[test]
    fn parses_every_section() {
        let nodes = parse_document("tc-1", DOCUMENT);
        assert_eq!(nodes.len(), 3);
        assert!(nodes.contains_key("tc-1:1.1"));
        assert!(nodes.contains_key("tc-1:1.2"));
        assert!(nodes.contains_key("tc-1:3"));
    }

    #[test]
    fn citations_are_extracted_in_order() {
        let nodes = parse_document("tc-1", DOCUMENT);
        let node = &nodes["tc-1:1.1"];
        assert_eq!(node.citations.len(), 2);
        assert_eq!(node.citations[0].reference, "Genesis 1:1");
        assert_eq!(
            node.citations[0].excerpt,
            "In the beginning God created the heavens and the earth."
        );
        assert_eq!(node.citations[1].reference, "John 1:3");
    }

    #[test]
    fn body_is_stripped_of_citations_and_collapsed() {
        let nodes = parse_document("tc-1", DOCUMENT);
        let node = &nodes["tc-1:1.1"];
        assert_eq!(
            node.body,
            "God is the source of all being and goodness. All creation flows from the creator."
        );
        assert!(!node.body.contains("Genesis"));
    }

    #[test]
    fn integer_section_ids_parse() {
        let nodes = parse_document("tc-1", DOCUMENT);
        assert_eq!(nodes["tc-1:3"].body, "Technology must serve divine purposes.");
        assert!(nodes["tc-1:3"].citations.is_empty());
    }

    #[test]
    fn document_without_sections_parses_empty() {
        let nodes = parse_document("tc-1", "# Only a title\n\nProse without numbered sections.\n");
        assert!(nodes.is_empty());
    }

    #[test]
    fn duplicate_section_ids_last_wins() {
        let document = "## 1.1 First version.\n\n## 1.1 Second version.\n";
        let nodes = parse_document("tc-1", document);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes["tc-1:1.1"].body, "Second version.");
    }
}
