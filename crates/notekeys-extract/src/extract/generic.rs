//! Stopword-delimited phrase extraction for space-delimited and Brahmic scripts.

use std::collections::HashSet;

use tracing::debug;

use crate::scoring::Scorer;
use crate::tokenize::{char_len, tokenize};
use crate::types::{Candidate, Token};

/// Generate and score phrase candidates.
///
/// Maximal runs of non-stop tokens become phrases. Phrases longer than
/// `max_phrase_tokens` are replaced by every sliding window of that many
/// tokens plus each of their tokens on its own.
pub fn candidates(
    text: &str,
    locale: &str,
    stopwords: &HashSet<String>,
    scorer: &Scorer<'_>,
    max_phrase_tokens: usize,
) -> Vec<Candidate> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Vec::new();
    }

    let window = max_phrase_tokens.max(1);
    let phrases = split_phrases(&tokens, stopwords);
    let mut candidates = Vec::new();
    for phrase in phrases {
        if phrase.len() <= window {
            candidates.push(Candidate::from_tokens(text, phrase));
            continue;
        }
        for window in phrase.windows(window) {
            candidates.push(Candidate::from_tokens(text, window));
        }
        for token in phrase {
            candidates.push(Candidate::from_tokens(text, std::slice::from_ref(token)));
        }
    }

    for candidate in &mut candidates {
        candidate.score = score_tokens(&candidate.tokens, locale, stopwords, scorer);
    }

    debug!(
        "generic: {} tokens -> {} candidates for '{}'",
        tokens.len(),
        candidates.len(),
        locale
    );
    candidates
}

fn is_stop_token(token: &Token, stopwords: &HashSet<String>) -> bool {
    char_len(&token.text) < 2 || stopwords.contains(&token.text.to_lowercase())
}

/// Maximal runs of consecutive non-stop tokens.
fn split_phrases<'t>(tokens: &'t [Token], stopwords: &HashSet<String>) -> Vec<&'t [Token]> {
    tokens
        .split(|t| is_stop_token(t, stopwords))
        .filter(|run| !run.is_empty())
        .collect()
}

/// Mean IDF over the tokens the oracle could score. When none could (no
/// data for the language, or it faulted mid-run), mean length heuristic.
fn score_tokens(
    tokens: &[Token],
    locale: &str,
    stopwords: &HashSet<String>,
    scorer: &Scorer<'_>,
) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    if scorer.has_oracle(locale) {
        let valid: Vec<f64> = tokens
            .iter()
            .filter_map(|t| scorer.idf_score(&t.text, locale))
            .collect();
        if !valid.is_empty() {
            return mean(&valid);
        }
    }

    let fallback: Vec<f64> = tokens
        .iter()
        .map(|t| scorer.fallback_score(&t.text, stopwords))
        .collect();
    mean(&fallback)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
