//! Candidate generation, one strategy per [`LanguagePath`].
//!
//! - `generic`: stopword-delimited phrases (RAKE-style) over word/mark tokens
//! - `japanese`: kanji and katakana script runs
//! - `chinese`: segmenter output for Mandarin and Cantonese
//! - `thai`: segmenter output for Thai
//!
//! Every candidate's text is a contiguous slice of the transcript.

pub mod chinese;
pub mod generic;
pub mod japanese;
pub mod thai;

use std::collections::HashSet;

use notekeys_core::{ExtractorConfig, LanguagePath};

use crate::scoring::Scorer;
use crate::segment::Segmenters;
use crate::tokenize::is_punctuation_or_space;
use crate::types::Candidate;

/// Run the generator for `path`. Candidates come back scored.
pub fn generate_candidates(
    path: LanguagePath,
    text: &str,
    locale: &str,
    stopwords: &HashSet<String>,
    segmenters: &Segmenters,
    scorer: &Scorer<'_>,
    config: &ExtractorConfig,
) -> Vec<Candidate> {
    match path {
        LanguagePath::Generic => {
            generic::candidates(text, locale, stopwords, scorer, config.max_phrase_tokens)
        }
        LanguagePath::Japanese => japanese::candidates(text, scorer),
        LanguagePath::Chinese => {
            chinese::candidates(text, locale, stopwords, segmenters.chinese.as_ref(), scorer)
        }
        LanguagePath::Thai => {
            thai::candidates(text, locale, stopwords, segmenters.thai.as_ref(), scorer)
        }
    }
}

/// Trim a segment and drop it if empty, pure punctuation/whitespace, or a stopword.
fn content_segment<'a>(segment: &'a str, stopwords: &HashSet<String>) -> Option<&'a str> {
    let trimmed = segment.trim();
    if trimmed.is_empty() || is_punctuation_or_space(trimmed) {
        return None;
    }
    if stopwords.contains(&trimmed.to_lowercase()) {
        return None;
    }
    Some(trimmed)
}
