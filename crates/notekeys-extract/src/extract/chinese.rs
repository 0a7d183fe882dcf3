//! Mandarin and Cantonese candidates from an external word segmenter.

use std::collections::HashSet;

use tracing::debug;

use super::content_segment;
use crate::scoring::Scorer;
use crate::segment::Segmenter;
use crate::types::Candidate;

/// Single characters that are almost always particles or function words.
const FUNCTION_CHARS: &str = "的是在了我和有不人也你为他这中大会就说到时要都上出来个把去能下过";

pub fn is_function_char(segment: &str) -> bool {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => FUNCTION_CHARS.contains(ch),
        _ => false,
    }
}

/// Generate and score candidates from Chinese or Cantonese text.
pub fn candidates(
    text: &str,
    locale: &str,
    stopwords: &HashSet<String>,
    segmenter: &dyn Segmenter,
    scorer: &Scorer<'_>,
) -> Vec<Candidate> {
    let segments = segmenter.segment(text);
    let candidates: Vec<Candidate> = segments
        .iter()
        .filter_map(|s| content_segment(s, stopwords))
        .filter(|s| !is_function_char(s))
        .map(|s| Candidate::scored(s, scorer.idf_or_default(s, locale)))
        .collect();

    debug!(
        "chinese: {} segments -> {} candidates ({})",
        segments.len(),
        candidates.len(),
        segmenter.name()
    );
    candidates
}
