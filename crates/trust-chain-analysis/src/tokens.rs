//! Word tokenization helpers shared by the extractors.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

static WORD: OnceLock<Regex> = OnceLock::new();
static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("word regex must compile"))
}

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]").expect("sentence regex must compile"))
}

/// Iterate the word tokens of a text.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    word_pattern().find_iter(text).map(|token| token.as_str())
}

/// Number of word tokens in a text.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Lowercased set of the word tokens in a text.
pub fn token_set(text: &str) -> HashSet<String> {
    words(text).map(|token| token.to_lowercase()).collect()
}

/// Split a text into sentences at `.`, `!` and `?`.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    sentence_break().split(text)
}
