//! Reference passage store.
//!
//! A precomputed mapping from passage reference to text and embedding
//! vector, serialized as JSON of the form
//! `{"John 3:16": {"text": "...", "vector": [...]}}`. Loaded once per run
//! and read-only afterwards. A missing store degrades the passage
//! validator to a zero score; it never fails a run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EmbeddingError, EmbeddingResult};
use crate::provider::EmbeddingProvider;

/// Text and vector stored for one passage reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPassage {
    /// Passage text.
    pub text: String,
    /// Unit-normalized embedding of the text.
    pub vector: Vec<f32>,
}

/// Read-only store of reference passages keyed by canonical reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassageStore {
    passages: BTreeMap<String, StoredPassage>,
}

impl PassageStore {
    /// Empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from reference/passage pairs.
    pub fn from_passages(
        passages: impl IntoIterator<Item = (String, StoredPassage)>,
    ) -> Self {
        Self {
            passages: passages.into_iter().collect(),
        }
    }

    /// Load the store from a JSON cache file.
    ///
    /// Fails with [`EmbeddingError::Cache`] on unreadable or malformed
    /// content; use [`PassageStore::load_or_empty`] at call sites where a
    /// missing cache should degrade instead of failing.
    pub fn load(path: impl AsRef<Path>) -> EmbeddingResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| EmbeddingError::cache(path.display().to_string(), err.to_string()))?;
        let store: PassageStore = serde_json::from_str(&raw)
            .map_err(|err| EmbeddingError::cache(path.display().to_string(), err.to_string()))?;
        debug!(path = %path.display(), passages = store.len(), "loaded passage store");
        Ok(store)
    }

    /// Load the store, degrading to an empty store with a warning when the
    /// cache is missing or unreadable.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "passage store unavailable, validation degrades to zero");
                Self::empty()
            }
        }
    }

    /// Serialize the store to a JSON cache file.
    pub fn save(&self, path: impl AsRef<Path>) -> EmbeddingResult<()> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(self)
            .map_err(|err| EmbeddingError::cache(path.display().to_string(), err.to_string()))?;
        std::fs::write(path, raw)
            .map_err(|err| EmbeddingError::cache(path.display().to_string(), err.to_string()))?;
        Ok(())
    }

    /// Build a store by embedding reference/text pairs through a provider.
    pub fn generate<P: EmbeddingProvider + ?Sized>(
        provider: &P,
        passages: &[(String, String)],
    ) -> EmbeddingResult<Self> {
        let texts: Vec<&str> = passages.iter().map(|(_, text)| text.as_str()).collect();
        if texts.is_empty() {
            return Ok(Self::empty());
        }
        let vectors = provider.embed(&texts)?;
        if vectors.len() != passages.len() {
            return Err(EmbeddingError::Provider(format!(
                "provider returned {} vectors for {} passages",
                vectors.len(),
                passages.len()
            )));
        }
        let mut store = BTreeMap::new();
        for ((reference, text), vector) in passages.iter().zip(vectors) {
            store.insert(
                reference.clone(),
                StoredPassage {
                    text: text.clone(),
                    vector,
                },
            );
        }
        Ok(Self { passages: store })
    }

    /// Number of passages in the store.
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// Whether the store holds no passages.
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Look up a passage by its canonical reference.
    pub fn get(&self, reference: &str) -> Option<&StoredPassage> {
        self.passages.get(reference)
    }

    /// Iterate passages in reference order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoredPassage)> {
        self.passages
            .iter()
            .map(|(reference, passage)| (reference.as_str(), passage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::HashedBowEmbedder;

    fn sample_pairs() -> Vec<(String, String)> {
        vec![
            (
                "John 3:16".to_string(),
                "For God so loved the world".to_string(),
            ),
            ("Psalm 23".to_string(), "The Lord is my shepherd".to_string()),
        ]
    }

    #[test]
    fn generate_embeds_every_passage() {
        let embedder = HashedBowEmbedder::default();
        let store = PassageStore::generate(&embedder, &sample_pairs()).unwrap();
        assert_eq!(store.len(), 2);
        let passage = store.get("John 3:16").unwrap();
        assert_eq!(passage.text, "For God so loved the world");
        assert_eq!(passage.vector.len(), embedder.dimension());
    }

    #[test]
    fn save_and_load_round_trip() {
        let embedder = HashedBowEmbedder::default();
        let store = PassageStore::generate(&embedder, &sample_pairs()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passage_vectors.json");
        store.save(&path).unwrap();
        let loaded = PassageStore::load(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn load_or_empty_degrades_on_missing_file() {
        let store = PassageStore::load_or_empty("/nonexistent/passage_vectors.json");
        assert!(store.is_empty());
    }

    #[test]
    fn load_fails_on_malformed_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            PassageStore::load(&path),
            Err(EmbeddingError::Cache { .. })
        ));
    }

    #[test]
    fn serialized_shape_is_a_plain_map() {
        let store = PassageStore::from_passages([(
            "Romans 3:23".to_string(),
            StoredPassage {
                text: "for all have sinned".to_string(),
                vector: vec![0.0, 1.0],
            },
        )]);
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["Romans 3:23"]["text"], "for all have sinned");
        assert_eq!(json["Romans 3:23"]["vector"][1], 1.0);
    }
}
