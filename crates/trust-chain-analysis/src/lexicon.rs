//! Term lexicons consulted by the extractors.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Key domain terms indicating explicit engagement with theological
/// premises. Presence is counted per distinct term, not per occurrence.
pub const CORE_THEOLOGICAL_TERMS: [&str; 20] = [
    "God",
    "Christ",
    "Jesus",
    "divine",
    "creator",
    "Lord",
    "Holy Spirit",
    "Scripture",
    "Bible",
    "sin",
    "redemption",
    "salvation",
    "faith",
    "grace",
    "worship",
    "holiness",
    "covenant",
    "providence",
    "sovereign",
    "eternal",
];

/// Core principles that require explicit first-person affirmation.
pub const CORE_PRINCIPLES: [&str; 5] = [
    "God as the source of all being and goodness",
    "Christ as the mediator between God and humanity",
    "humans created in God's image",
    "sin as rebellion against God",
    "technology must serve divine purposes",
];

/// Basic vocabulary tier, weight 0.5.
const BASIC_CONCEPTS: [&str; 10] = [
    "god", "jesus", "bible", "faith", "prayer", "church", "heaven", "sin", "salvation", "worship",
];

/// Intermediate vocabulary tier, weight 0.7.
const INTERMEDIATE_CONCEPTS: [&str; 10] = [
    "trinity",
    "incarnation",
    "atonement",
    "covenant",
    "resurrection",
    "sanctification",
    "justification",
    "providence",
    "revelation",
    "eschatology",
];

/// Advanced vocabulary tier, weight 1.0.
const ADVANCED_CONCEPTS: [&str; 12] = [
    "soteriology",
    "christology",
    "pneumatology",
    "ecclesiology",
    "hermeneutics",
    "exegesis",
    "theodicy",
    "eschatology",
    "hypostatic union",
    "kenosis",
    "perichoresis",
    "imago dei",
];

static CORE_TERM_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static CONCEPT_WEIGHTS: OnceLock<BTreeMap<&'static str, f32>> = OnceLock::new();

/// Word-bounded, case-insensitive patterns for the core terms.
pub fn core_term_patterns() -> &'static [Regex] {
    CORE_TERM_PATTERNS.get_or_init(|| {
        CORE_THEOLOGICAL_TERMS
            .iter()
            .map(|term| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                    .expect("core term regex must compile")
            })
            .collect()
    })
}

/// Count the distinct core terms present in a text.
pub fn core_terms_present(text: &str) -> usize {
    core_term_patterns()
        .iter()
        .filter(|pattern| pattern.is_match(text))
        .count()
}

/// Vocabulary concepts with their tier weights.
///
/// Tiers are merged in ascending order so a concept listed in more than
/// one tier keeps its highest weight.
pub fn concept_weights() -> &'static BTreeMap<&'static str, f32> {
    CONCEPT_WEIGHTS.get_or_init(|| {
        let mut weights = BTreeMap::new();
        for concept in BASIC_CONCEPTS {
            weights.insert(concept, 0.5);
        }
        for concept in INTERMEDIATE_CONCEPTS {
            weights.insert(concept, 0.7);
        }
        for concept in ADVANCED_CONCEPTS {
            weights.insert(concept, 1.0);
        }
        weights
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_terms_not_occurrences() {
        let text = "God God God and the Bible";
        assert_eq!(core_terms_present(text), 2);
    }

    #[test]
    fn term_matching_is_word_bounded() {
        // "singing" must not match "sin".
        assert_eq!(core_terms_present("singing in the rain"), 0);
        assert_eq!(core_terms_present("sin is real"), 1);
    }

    #[test]
    fn term_matching_is_case_insensitive() {
        assert_eq!(core_terms_present("GRACE and mercy"), 1);
    }

    #[test]
    fn concept_tiers_keep_highest_weight() {
        let weights = concept_weights();
        // Listed in both the intermediate and advanced tiers.
        assert_eq!(weights["eschatology"], 1.0);
        assert_eq!(weights["trinity"], 0.7);
        assert_eq!(weights["faith"], 0.5);
    }

    #[test]
    fn multiword_concepts_are_present() {
        let weights = concept_weights();
        assert_eq!(weights["hypostatic union"], 1.0);
        assert_eq!(weights["imago dei"], 1.0);
    }
}
