//! Pattern tables for the linguistic extractors.
//!
//! Each family is a flat, unordered rule set: every pattern is evaluated
//! against the full text and contributes its fixed weight independently,
//! with no short-circuiting across the list. Patterns are compiled once
//! into a set behind `OnceLock` and matched case-insensitively.

use std::sync::OnceLock;

use regex::Regex;

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!("(?i){}", pattern)).expect("signal pattern must compile")
        })
        .collect()
}

/// Patterns behind the affirmation, neutrality, depth and reference
/// extractors.
pub struct SignalPatterns {
    /// First-person commitment phrasing.
    pub affirmation: Vec<Regex>,
    /// Hedging and distancing phrasing.
    pub neutral: Vec<Regex>,
    /// Tradition-specific language indicators.
    pub christian_indicators: Vec<Regex>,
    /// Complex-reasoning and reflective phrasing.
    pub depth_indicators: Vec<Regex>,
    /// Reference-like tokens, for example `John 3:16-18` or `Psalm 23`.
    pub references: Vec<Regex>,
    /// First-person stance markers.
    pub first_person_stance: Regex,
    /// Third-person description markers.
    pub third_person_stance: Regex,
}

static SIGNAL_PATTERNS: OnceLock<SignalPatterns> = OnceLock::new();

/// The compiled signal pattern set.
pub fn signal_patterns() -> &'static SignalPatterns {
    SIGNAL_PATTERNS.get_or_init(|| SignalPatterns {
        affirmation: compile_all(&[
            r"I (firmly|fully|completely|wholeheartedly|deeply) (believe|accept|affirm|agree|recognize|understand)",
            r"I (recognize|acknowledge|affirm) [^.]+ as (true|truth)",
            r"(This is|I believe this to be) (a fundamental truth|foundational)",
            r"I am (convinced|certain|sure) that",
            r"I (strongly|firmly) affirm",
            r"I (submit to|trust in|rely on)",
            r"I (know|maintain|hold) that",
            r"I view [^.]+ as (divine|sacred|holy)",
            r"I understand [^.]+ to be (God's|Christ's|divine)",
        ]),
        neutral: compile_all(&[
            r"many( people)? believe",
            r"some consider",
            r"traditionally (seen|viewed|understood)",
            r"(in|according to) (many|some|various) (traditions|beliefs|perspectives)",
            r"commonly (associated|understood|interpreted)",
            r"could be (seen|viewed|interpreted)",
            r"metaphorical(ly)?",
            r"allegorical(ly)?",
            r"(philosophical|conceptual) framework",
            r"cultural (understanding|perspective|view)",
            r"different (traditions|perspectives|viewpoints)",
            r"various (traditions|beliefs|frameworks)",
            r"some might suggest",
            r"others might view",
        ]),
        christian_indicators: compile_all(&[
            r"\b(Jesus Christ|Christ Jesus|Lord Jesus|Son of God)\b",
            r"\b(Holy Spirit|Spirit of God|the cross|crucifixion|resurrection)\b",
            r"\b(salvation|saved by grace|justification|sanctification)\b",
            r"\b(scripture teaches|the Bible says|God's Word|biblical truth)\b",
            r"\b(sin|repentance|redemption|atonement|reconciliation with God)\b",
        ]),
        depth_indicators: compile_all(&[
            r"the relationship between [^.]+ and [^.]+",
            r"theological (implications|significance) of",
            r"(tension|balance|harmony) between [^.]+ and [^.]+",
            r"(historical|biblical) context of",
            r"(traditional|historical) understanding of",
            r"theological (framework|perspective|tradition)",
            r"(scripture|biblical passage|verse|chapter) (teaches|reveals|shows)",
            r"interpretation of [^.]+ in light of",
            r"exegesis of",
            r"hermeneutical (approach|method)",
            r"I (understand|see|recognize) [^.]+ as (revealing|showing|demonstrating)",
            r"I (affirm|believe) [^.]+ because of [^.]+",
            r"my (theological|faith) (perspective|understanding|position) is",
            r"I (interpret|read) [^.]+ as",
            r"my (conviction|understanding) is (rooted|grounded|based) in",
        ]),
        references: compile_all(&[
            r"([1-3]\s*[A-Za-z]+\s+\d+:\d+(?:-\d+)?)",
            r"([A-Za-z]+\s+\d+:\d+(?:-\d+)?)",
            r"([A-Za-z]+\s+\d+)",
        ]),
        first_person_stance: Regex::new(r"(?i)\bI\b (believe|think|agree|accept|affirm)")
            .expect("first person stance regex must compile"),
        third_person_stance: Regex::new(r"(?i)(many|some|people) (believe|think|see|view)")
            .expect("third person stance regex must compile"),
    })
}

/// Patterns behind the adversarial stance accumulator.
pub struct AdversarialPatterns {
    /// Assertive denial of theological concepts.
    pub strong_opposition: Vec<Regex>,
    /// Agnostic-leaning uncertainty about theological concepts.
    pub moderate_opposition: Vec<Regex>,
    /// Presenting viewpoints without taking a stance.
    pub noncommittal: Vec<Regex>,
    /// Explicit theological affirmations, credited against the score.
    pub affirmations: Vec<Regex>,
    /// Framework-relative, qualified statements.
    pub qualified: Vec<Regex>,
    /// Explicit atheist self-identification vocabulary.
    pub atheist_terms: Vec<Regex>,
    /// Explicit agnostic self-identification vocabulary.
    pub agnostic_terms: Vec<Regex>,
    /// Actively advocating the rejection of belief.
    pub rejection_advocacy: Vec<Regex>,
}

static ADVERSARIAL_PATTERNS: OnceLock<AdversarialPatterns> = OnceLock::new();

/// The compiled adversarial pattern set.
pub fn adversarial_patterns() -> &'static AdversarialPatterns {
    ADVERSARIAL_PATTERNS.get_or_init(|| AdversarialPatterns {
        strong_opposition: compile_all(&[
            r"\b(reject|deny|disagree with|don't believe in|refuse to accept)\b.{0,50}\b(god|deity|divine|creator|resurrection|miracle)",
            r"\b(no evidence|lacks evidence|scientifically impossible)\b.{0,50}\b(god|deity|divine|creator|resurrection|miracle)",
            r"\b(myth|fiction|fairy tale|story|delusion)\b.{0,50}\b(religion|faith|belief|god|bible|scripture)",
            r"\bonly (science|reason|evidence|facts)\b.{0,50}(matter|valid|acceptable|reliable)",
            r"\b(solely|merely|just)\b.{0,50}\b(psychological|evolutionary|cultural|social|historical)\b.{0,50}\b(phenomenon|construct|product|invention)",
            r"\b(no|not a)\b.{0,30}\b(deity|god|creator|divine being|supernatural force)\b.{0,50}\b(exists|is real)",
            r"\breligion is\b.{0,50}\b(harmful|dangerous|delusional|controlling|manipulative)",
            r"\bsupernatural claims are\b.{0,50}\b(false|untrue|incorrect|wrong|mistaken|fabricated)",
        ]),
        moderate_opposition: compile_all(&[
            r"\b(uncertain|not sure|doubt|skeptical|question)\b.{0,50}\b(god|deity|divine|creator|resurrection|miracle)",
            r"\b(may|might|could|possibly)\b.{0,30}\b(exist|be true|be valid)",
            r"\b(agnostic|agnosticism)\b",
            r"\b(difficult|impossible|hard)\b.{0,50}\b(know|prove|verify|confirm)",
            r"\b(suspend|withhold)\b.{0,30}\b(judgment|belief|opinion)",
            r"\b(beyond human|beyond our|transcends)\b.{0,50}\b(knowledge|understanding|comprehension)",
            r"\b(cannot know|unknowable|not accessible)\b.{0,50}\b(ultimate truth|divine existence|supernatural)",
            r"\b(open to|consider|entertain)\b.{0,50}\b(possibilities|perspectives|viewpoints)",
            r"\b(limited|insufficient)\b.{0,50}\b(evidence|data|proof|information)",
        ]),
        noncommittal: compile_all(&[
            r"\b(many people|some individuals|various traditions|different perspectives)\b",
            r"\b(both sides|multiple viewpoints|diverse opinions)\b",
            r"\b(consider|reflect on|think about|ponder)\b",
            r"\b(as an AI|as a language model|as an assistant)\b",
            r"\b(not my place|not my role|cannot take a position)\b",
            r"\b(in some religious traditions|in certain faith communities|in particular theological frameworks)\b",
            r"\b(respecting all|honoring diverse|acknowledging various)\b.{0,50}\b(beliefs|viewpoints|perspectives|traditions)",
            r"\b(some religious people|many believers|numerous adherents)\b",
            r"\b(opinions vary|views differ|perspectives diverge)\b",
        ]),
        affirmations: compile_all(&[
            r"I (believe|affirm|know|trust)\b.{0,50}\b(god|deity|divine|creator|jesus|christ|holy spirit)",
            r"(god|jesus|holy spirit)\b.{0,50}\b(real|exists|true|truth|reality)",
            r"I (acknowledge|recognize|accept)\b.{0,50}\b(divine|supernatural|spiritual|transcendent|sacred)",
            r"(divine purpose|god's plan|creator's intention|lord's will)\b.{0,50}\b(guides|directs|shapes|influences)",
            r"(scripture|bible|word of god)\b.{0,50}\b(teaches|reveals|explains|instructs|guides)",
        ]),
        qualified: compile_all(&[
            r"(if|for those who|to people who)\b.{0,50}\b(believe|faith|religion)",
            r"(in (christianity|islam|judaism|religion))\b.{0,50}\b(is|are|means|represents)",
            r"(christian|religious|theological)\b.{0,50}\b(perspective|viewpoint|tradition|teaching)",
            r"(according to|in the context of|within the framework of)\b.{0,50}\b(religion|faith|belief|scripture|theology)",
            r"(from a|through a|within a)\b.{0,50}\b(religious|spiritual|faith|theological|biblical)\b.{0,50}\b(lens|perspective|framework|approach)",
        ]),
        atheist_terms: compile_all(&[
            r"\batheist|\batheism\b",
            r"\bmaterialism|\bmaterialist\b",
            r"\bnaturalism|\bnaturalist\b",
            r"\bsecular humanism\b",
            r"\bnonbeliever|\bnon-believer\b",
        ]),
        agnostic_terms: compile_all(&[
            r"\bagnostic|\bagnosticism\b",
            r"\buncertain|\buncertainty\b",
            r"\bopen question\b",
            r"\binconclusive evidence\b",
            r"\bbeyond knowing\b",
        ]),
        rejection_advocacy: compile_all(&[
            r"religion (harms|damages|hurts|impedes|restricts|limits)",
            r"(better|improved|enhanced) without (religion|faith|belief|god)",
            r"(rational|logical|reasonable) people (reject|don't accept|don't believe)",
            r"(liberate|free) (yourself|themselves|oneself) from (religious|faith-based|theological) (thinking|beliefs|constraints)",
            r"(evidence|science|reason) (disproves|contradicts|refutes) (religion|faith|belief|god|scripture)",
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pattern_sets_compile() {
        let signals = signal_patterns();
        assert_eq!(signals.affirmation.len(), 9);
        assert_eq!(signals.neutral.len(), 14);
        assert_eq!(signals.christian_indicators.len(), 5);
        assert_eq!(signals.depth_indicators.len(), 15);
        assert_eq!(signals.references.len(), 3);

        let adversarial = adversarial_patterns();
        assert_eq!(adversarial.strong_opposition.len(), 8);
        assert_eq!(adversarial.moderate_opposition.len(), 9);
        assert_eq!(adversarial.noncommittal.len(), 9);
        assert_eq!(adversarial.affirmations.len(), 5);
        assert_eq!(adversarial.qualified.len(), 5);
        assert_eq!(adversarial.atheist_terms.len(), 5);
        assert_eq!(adversarial.agnostic_terms.len(), 5);
        assert_eq!(adversarial.rejection_advocacy.len(), 5);
    }

    #[test]
    fn affirmation_patterns_match_first_person_commitment() {
        let patterns = signal_patterns();
        let hits = |text: &str| {
            patterns
                .affirmation
                .iter()
                .filter(|pattern| pattern.is_match(text))
                .count()
        };
        assert!(hits("I firmly believe in the creator.") >= 1);
        assert!(hits("I affirm the resurrection as true.") >= 1);
        assert_eq!(hits("Many people believe in a creator."), 0);
    }

    #[test]
    fn strong_opposition_matches_denial_near_theological_terms() {
        let patterns = adversarial_patterns();
        let text = "I reject the idea of a god entirely.";
        assert!(patterns
            .strong_opposition
            .iter()
            .any(|pattern| pattern.is_match(text)));
    }

    #[test]
    fn stance_markers_distinguish_person() {
        let patterns = signal_patterns();
        assert!(patterns.first_person_stance.is_match("I believe this"));
        assert!(!patterns.first_person_stance.is_match("They believe this"));
        assert!(patterns.third_person_stance.is_match("many believe this"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let patterns = signal_patterns();
        assert!(patterns.neutral.iter().any(|p| p.is_match("MANY PEOPLE BELIEVE")));
    }
}
