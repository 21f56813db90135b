//! Scripture-style reference extraction.

use crate::patterns::signal_patterns;

/// Extract reference-like tokens from text.
///
/// Three patterns run independently: numbered-book references
/// (`1 John 3:16-18`), chapter-and-verse references (`John 3:16`), and
/// bare chapter references (`Psalm 23`). The patterns overlap on purpose
/// and the same mention may be extracted more than once; density counting
/// relies on that behavior.
pub fn extract_references(text: &str) -> Vec<String> {
    let mut references = Vec::new();
    for pattern in &signal_patterns().references {
        for capture in pattern.captures_iter(text) {
            references.push(capture[1].trim().to_string());
        }
    }
    references
}

/// Reference density: 0.2 per extracted reference, capped at 1.0.
pub fn reference_density(text: &str) -> f32 {
    (extract_references(text).len() as f32 * 0.2).min(1.0)
}
