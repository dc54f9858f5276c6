//! Language helpers for the classifier adapter.
//!
//! Detection of Cyrillic input, sentence segmentation for the translator,
//! and token-window truncation.

use regex::Regex;
use std::sync::LazyLock;

const CYRILLIC_PATTERN: &str = r"\p{Cyrillic}";

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static CYRILLIC_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(CYRILLIC_PATTERN, "CYRILLIC_RE"));

/// True when the text contains at least one Cyrillic character.
///
/// Used to decide whether input must be translated before classification.
pub fn contains_cyrillic(text: &str) -> bool {
    CYRILLIC_RE.is_match(text)
}

/// Splits text into sentences at whitespace following `.`, `!`, or `?`.
///
/// The terminal punctuation stays attached to its sentence and the boundary
/// whitespace is dropped. Text without sentence boundaries comes back as a
/// single element; empty input yields no elements.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut rest = text;

    'outer: while !rest.is_empty() {
        let mut iter = rest.char_indices().peekable();
        while let Some((_, c)) = iter.next() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }
            let (j, next) = match iter.peek() {
                Some(&(j, next)) => (j, next),
                None => break,
            };
            if !next.is_whitespace() {
                continue;
            }
            sentences.push(&rest[..j]);
            match rest[j..].char_indices().find(|(_, ch)| !ch.is_whitespace()) {
                Some((k, _)) => {
                    rest = &rest[j + k..];
                    continue 'outer;
                }
                None => {
                    // Only trailing whitespace left
                    rest = "";
                    continue 'outer;
                }
            }
        }
        sentences.push(rest);
        break;
    }

    sentences
}

/// Truncates text to at most `max_tokens` whitespace-delimited tokens.
///
/// Text within the window is returned unchanged; truncated text is rejoined
/// with single spaces.
pub fn truncate_tokens(text: &str, max_tokens: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() <= max_tokens {
        text.to_string()
    } else {
        tokens[..max_tokens].join(" ")
    }
}
