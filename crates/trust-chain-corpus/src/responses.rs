//! Questionnaire response extraction.
//!
//! Response documents use a numbered-answer format:
//!
//! ```text
//! 1. I firmly believe that God created all things.
//!
//! 2. [AI Response to question 2]
//! ```
//!
//! The extractor pulls the answer text for each numbered item, skipping
//! markdown headers and recognized placeholder markers, and reports a
//! validity record. Placeholders and too-short answers do not abort a
//! run; they attenuate the final score downstream.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use trust_chain_core::config::ValidityConfig;
use trust_chain_core::ResponseValidity;

/// Compiled response-format patterns, built once.
struct ResponsePatterns {
    section_header: Regex,
    numbered_item: Regex,
    placeholders: Vec<Regex>,
}

static RESPONSE_PATTERNS: OnceLock<ResponsePatterns> = OnceLock::new();

fn patterns() -> &'static ResponsePatterns {
    RESPONSE_PATTERNS.get_or_init(|| ResponsePatterns {
        section_header: Regex::new(r"^#{1,3}\s").expect("header regex must compile"),
        numbered_item: Regex::new(r"^(\d+)\.\s").expect("numbered item regex must compile"),
        placeholders: [
            r"\[AI Response to question \d+\]",
            r"\[Response\]",
            r"\[Insert response here\]",
            r"\[Answer\]",
            r"\[Placeholder\]",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("placeholder regex must compile"))
        .collect(),
    })
}

/// Extracted questionnaire responses plus their validity record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    /// Individual answers in question order.
    pub responses: Vec<String>,
    /// All answers joined with single spaces.
    pub combined: String,
    /// Validity analysis of the set.
    pub validity: ResponseValidity,
}

/// Extract the answers from a numbered-response document.
pub fn extract_responses(content: &str, config: &ValidityConfig) -> ResponseSet {
    let patterns = patterns();
    let lines: Vec<&str> = content.trim().lines().map(str::trim).collect();

    let mut responses: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_response = false;

    let mut placeholder_count = 0usize;
    let mut question_count = 0usize;
    let mut short_responses = 0usize;

    let flush = |current: &mut Vec<&str>, responses: &mut Vec<String>, short: &mut usize| {
        if current.is_empty() {
            return;
        }
        let text = current.join(" ").trim().to_string();
        current.clear();
        if !text.is_empty() {
            if text.len() < config.short_response_len {
                *short += 1;
            }
            responses.push(text);
        }
    };

    for (index, &line) in lines.iter().enumerate() {
        if line.is_empty() {
            // A blank line ends the current answer when the next line
            // starts a new numbered item.
            let next_is_numbered = lines
                .get(index + 1)
                .is_some_and(|next| patterns.numbered_item.is_match(next));
            if in_response && !current.is_empty() && next_is_numbered {
                flush(&mut current, &mut responses, &mut short_responses);
                in_response = false;
            }
            continue;
        }

        if patterns.section_header.is_match(line) {
            flush(&mut current, &mut responses, &mut short_responses);
            in_response = false;
            continue;
        }

        if let Some(numbered) = patterns.numbered_item.find(line) {
            flush(&mut current, &mut responses, &mut short_responses);
            let rest = line[numbered.end()..].trim();
            let is_placeholder = patterns
                .placeholders
                .iter()
                .any(|pattern| pattern.is_match(rest));
            if is_placeholder {
                placeholder_count += 1;
                in_response = false;
            } else {
                in_response = true;
                question_count += 1;
                if !rest.is_empty() {
                    current.push(rest);
                }
            }
            continue;
        }

        if patterns
            .placeholders
            .iter()
            .any(|pattern| pattern.is_match(line))
        {
            placeholder_count += 1;
            continue;
        }

        if in_response {
            current.push(line);
        }
    }
    flush(&mut current, &mut responses, &mut short_responses);

    let combined = responses.join(" ");
    let total_responses = responses.len();
    let is_valid = placeholder_count == 0
        && total_responses > 0
        && short_responses < config.max_short_responses;

    if !is_valid {
        warn!(
            placeholders = placeholder_count,
            total = total_responses,
            short = short_responses,
            "response validity check failed"
        );
    }

    ResponseSet {
        validity: ResponseValidity {
            placeholder_count,
            question_count,
            total_responses,
            short_responses,
            response_length: combined.len(),
            is_valid,
        },
        combined,
        responses,
    }
}
