//! Principle corpus loading from files and directories.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use trust_chain_core::PrincipleNode;

use crate::error::{CorpusError, CorpusResult};
use crate::parser::parse_document;

/// A loaded, immutable set of principle nodes keyed by `chain:section` id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrincipleCorpus {
    nodes: BTreeMap<String, PrincipleNode>,
}

impl PrincipleCorpus {
    /// Number of nodes in the corpus.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the corpus holds no nodes.
    ///
    /// An empty corpus is a reportable condition, not an error; scoring
    /// against it fails with a no-principles error.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by its `chain:section` id.
    pub fn get(&self, id: &str) -> Option<&PrincipleNode> {
        self.nodes.get(id)
    }

    /// Iterate nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PrincipleNode> {
        self.nodes.values()
    }

    /// Merge nodes from another document into this corpus, last-wins on
    /// duplicate ids.
    pub fn merge(&mut self, nodes: BTreeMap<String, PrincipleNode>) {
        self.nodes.extend(nodes);
    }
}

impl FromIterator<PrincipleNode> for PrincipleCorpus {
    fn from_iter<I: IntoIterator<Item = PrincipleNode>>(iter: I) -> Self {
        Self {
            nodes: iter
                .into_iter()
                .map(|node| (node.id.to_string(), node))
                .collect(),
        }
    }
}

/// Load a principle corpus from a document or a directory of documents.
///
/// A directory load parses every `tc-*.md` file it contains, merged in
/// filename order. A single-file load uses the file stem as the chain id
/// when it matches `tc-<n>`, falling back to chain `tc-1` otherwise.
///
/// Fails with [`CorpusError::NotFound`] when the path does not exist, is
/// not a markdown document, or is a directory containing no eligible
/// documents.
pub fn load_corpus(path: impl AsRef<Path>) -> CorpusResult<PrincipleCorpus> {
    let path = path.as_ref();
    if path.is_dir() {
        load_directory(path)
    } else if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
        load_file(path)
    } else {
        Err(CorpusError::not_found(path))
    }
}

fn load_directory(dir: &Path) -> CorpusResult<PrincipleCorpus> {
    let mut documents: Vec<_> = std::fs::read_dir(dir)
        .map_err(|err| CorpusError::io(dir, err))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().is_some_and(|ext| ext == "md")
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("tc-"))
        })
        .collect();
    documents.sort();

    if documents.is_empty() {
        return Err(CorpusError::not_found(dir));
    }

    let mut corpus = PrincipleCorpus::default();
    for document in &documents {
        let chain_id = chain_id_for(document);
        let content = std::fs::read_to_string(document)
            .map_err(|err| CorpusError::io(document.clone(), err))?;
        let nodes = parse_document(&chain_id, &content);
        if nodes.is_empty() {
            warn!(document = %document.display(), "principle document contains no sections");
        }
        corpus.merge(nodes);
    }

    info!(dir = %dir.display(), documents = documents.len(), nodes = corpus.len(), "loaded principle corpus");
    Ok(corpus)
}

fn load_file(file: &Path) -> CorpusResult<PrincipleCorpus> {
    let chain_id = chain_id_for(file);
    let content =
        std::fs::read_to_string(file).map_err(|err| CorpusError::io(file, err))?;
    let mut corpus = PrincipleCorpus::default();
    corpus.merge(parse_document(&chain_id, &content));
    info!(file = %file.display(), nodes = corpus.len(), "loaded principle document");
    Ok(corpus)
}

/// Chain id for a document: the file stem when it matches `tc-<n>`,
/// otherwise the first chain.
fn chain_id_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let numbered = stem
        .strip_prefix("tc-")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()));
    if numbered {
        stem.to_string()
    } else {
        "tc-1".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_uses_numbered_stem() {
        assert_eq!(chain_id_for(Path::new("/a/tc-3-stewardship.md")), "tc-3-stewardship");
        assert_eq!(chain_id_for(Path::new("/a/tc-12.md")), "tc-12");
    }

    #[test]
    fn chain_id_falls_back_to_first_chain() {
        assert_eq!(chain_id_for(Path::new("/a/principles.md")), "tc-1");
        assert_eq!(chain_id_for(Path::new("/a/tc-draft.md")), "tc-1");
    }

    #[test]
    fn missing_path_is_not_found() {
        assert!(matches!(
            load_corpus("/nonexistent/chains"),
            Err(CorpusError::NotFound { .. })
        ));
    }
}
