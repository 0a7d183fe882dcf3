//! Word tokenization and punctuation tests.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Token;

// Combining marks must be part of a token, or Brahmic scripts split at
// every vowel sign and virama.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w\p{M}]+").expect("valid word regex"));

static PUNCT_OR_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{P}\s]+$").expect("valid punctuation regex"));

/// Split `text` into maximal runs of word and mark characters.
pub fn tokenize(text: &str) -> Vec<Token> {
    WORD_RE
        .find_iter(text)
        .map(|m| Token {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Split `text` into alternating word and non-word spans that concatenate
/// back to `text`.
pub fn word_boundaries(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut last = 0;
    for m in WORD_RE.find_iter(text) {
        if m.start() > last {
            spans.push(&text[last..m.start()]);
        }
        spans.push(m.as_str());
        last = m.end();
    }
    if last < text.len() {
        spans.push(&text[last..]);
    }
    spans
}

/// True when every character is punctuation or whitespace.
pub fn is_punctuation_or_space(s: &str) -> bool {
    PUNCT_OR_SPACE_RE.is_match(s)
}

/// Length in characters.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
