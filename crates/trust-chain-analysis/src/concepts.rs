//! Weighted concept lexicon scoring.
//!
//! Complements the pattern-based extractors with substring matching over
//! two weighted concept lists: tradition-affirming concepts with positive
//! weights and contrary concepts with negative weights. The combined score
//! may be negative; consumers clamp it.

/// Tradition-affirming concepts with positive association weights.
pub const POSITIVE_CONCEPTS: &[(&str, f32)] = &[
    ("trinity", 0.9),
    ("jesus christ", 1.0),
    ("son of god", 1.0),
    ("holy spirit", 0.9),
    ("salvation", 0.9),
    ("resurrection", 1.0),
    ("crucifixion", 1.0),
    ("forgiveness of sins", 1.0),
    ("eternal life", 0.9),
    ("heaven", 0.8),
    ("god's love", 0.9),
    ("faith in christ", 1.0),
    ("grace", 0.9),
    ("repentance", 0.9),
    ("sin", 0.8),
    ("creation", 0.8),
    ("gospel", 1.0),
    ("kingdom of god", 0.9),
    ("prayer", 0.7),
    ("word of god", 0.9),
    ("scripture", 0.9),
    ("commandments", 0.8),
    ("discipleship", 0.8),
    ("new testament", 0.8),
    ("old testament", 0.8),
    ("bible", 0.8),
    ("moses", 0.7),
    ("abraham", 0.7),
    ("david", 0.7),
    ("paul", 0.7),
    ("peter", 0.7),
    ("john", 0.7),
    ("isaiah", 0.7),
    ("psalms", 0.7),
    ("gospel of", 0.8),
    ("epistle", 0.7),
    ("revelation", 0.7),
    ("in the beginning", 0.8),
    ("for god so loved", 1.0),
    ("kingdom of heaven", 0.9),
    ("sermon on the mount", 0.9),
    ("love your neighbor", 0.9),
    ("forgive", 0.8),
    ("blessed are", 0.8),
    ("born again", 0.8),
    ("as it is written", 0.8),
    ("faith, hope, and love", 0.9),
    ("image of god", 0.9),
    ("fruit of the spirit", 0.9),
    ("good news", 0.8),
];

/// Contrary concepts with negative association weights.
pub const NEGATIVE_CONCEPTS: &[(&str, f32)] = &[
    ("karma", -0.8),
    ("reincarnation", -0.8),
    ("nirvana", -0.7),
    ("enlightenment", -0.5),
    ("chakra", -0.8),
    ("third eye", -0.8),
    ("astrology", -0.7),
    ("zodiac", -0.7),
    ("spirit guide", -0.6),
    ("past life", -0.8),
    ("pantheism", -0.8),
    ("polytheism", -0.8),
    ("multiple gods", -0.8),
    ("goddess", -0.7),
    ("impersonal god", -0.9),
    ("god is energy", -0.8),
    ("universe consciousness", -0.7),
    ("divine within", -0.7),
    ("all paths lead to god", -0.8),
    ("no objective truth", -0.8),
    ("create your own reality", -0.7),
    ("moral relativism", -0.7),
    ("humans are gods", -0.9),
    ("no sin", -0.9),
    ("no need for salvation", -0.9),
    ("universe without creator", -0.9),
    ("evolved without divine", -0.8),
    ("no afterlife", -0.8),
    ("no judgment", -0.8),
    ("self-salvation", -0.8),
    ("works-based salvation", -0.6),
];

/// Score concept usage in a text.
///
/// The positive sum is normalized by twice the matched concept count, the
/// negative sum by the matched count; the two are added. The result can be
/// negative when contrary concepts dominate.
pub fn concept_score(text: &str) -> f32 {
    let lower = text.to_lowercase();

    let matched_positive: Vec<f32> = POSITIVE_CONCEPTS
        .iter()
        .filter(|(concept, _)| lower.contains(concept))
        .map(|(_, weight)| *weight)
        .collect();
    let matched_negative: Vec<f32> = NEGATIVE_CONCEPTS
        .iter()
        .filter(|(concept, _)| lower.contains(concept))
        .map(|(_, weight)| *weight)
        .collect();

    let positive: f32 =
        matched_positive.iter().sum::<f32>() / (matched_positive.len() * 2).max(1) as f32;
    let negative: f32 = matched_negative.iter().sum::<f32>() / matched_negative.len().max(1) as f32;

    positive + negative
}
