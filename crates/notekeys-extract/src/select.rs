//! Keyword selection: rank, confidence gate, length limits, substring dedup.

use notekeys_core::{ExtractorConfig, MAX_KEYWORDS};

use crate::tokenize::char_len;
use crate::types::Candidate;

/// Pick up to `max_keywords` keywords (never more than [`MAX_KEYWORDS`])
/// from scored candidates.
///
/// `has_oracle` selects the confidence gate: `min_idf` for IDF scores,
/// `fallback_min_score` for length-heuristic scores. A candidate is skipped
/// when it contains, or is contained in, an already selected keyword
/// (case-insensitive). Output is in descending score order.
pub fn select_keywords(
    mut candidates: Vec<Candidate>,
    max_keywords: usize,
    has_oracle: bool,
    config: &ExtractorConfig,
) -> Vec<String> {
    let max_keywords = max_keywords.min(MAX_KEYWORDS);
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let min_score = if has_oracle {
        config.min_idf
    } else {
        config.fallback_min_score
    };

    let mut selected: Vec<String> = Vec::with_capacity(max_keywords);
    let mut selected_lower: Vec<String> = Vec::with_capacity(max_keywords);

    for candidate in &candidates {
        if selected.len() >= max_keywords {
            break;
        }

        let text = candidate.text.trim();
        let len = char_len(text);
        if len > config.max_keyword_chars || len < config.min_keyword_chars {
            continue;
        }
        if candidate.score < min_score {
            continue;
        }

        let lower = text.to_lowercase();
        let overlaps = selected_lower
            .iter()
            .any(|existing| existing.contains(&lower) || lower.contains(existing.as_str()));
        if overlaps {
            continue;
        }

        selected.push(text.to_string());
        selected_lower.push(lower);
    }

    selected
}
