//! Thai candidates from an external word segmenter.

use std::collections::HashSet;

use tracing::debug;

use super::content_segment;
use crate::scoring::Scorer;
use crate::segment::Segmenter;
use crate::tokenize::char_len;
use crate::types::Candidate;

/// Generate and score candidates from Thai text. Single-character
/// segments are dropped.
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
        .filter(|s| char_len(s) > 1)
        .map(|s| Candidate::scored(s, scorer.idf_or_default(s, locale)))
        .collect();

    debug!(
        "thai: {} segments -> {} candidates ({})",
        segments.len(),
        candidates.len(),
        segmenter.name()
    );
    candidates
}
