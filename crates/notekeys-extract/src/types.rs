//! Pipeline data types.

use serde::{Deserialize, Serialize};

/// A maximal run of word and combining-mark characters.
///
/// `start..end` is the byte range of `text` in the source transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// A keyword candidate: a contiguous span of the transcript plus its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub text: String,
    /// Tokens the span was built from (generic path only).
    #[serde(skip)]
    pub tokens: Vec<Token>,
    pub score: f64,
}

impl Candidate {
    /// Unscored candidate without token provenance.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: Vec::new(),
            score: 0.0,
        }
    }

    pub fn scored(text: impl Into<String>, score: f64) -> Self {
        Self {
            score,
            ..Self::new(text)
        }
    }

    /// Candidate spanning `tokens` in `source`, from the first token's start
    /// to the last token's end (inner spacing and punctuation preserved).
    pub fn from_tokens(source: &str, tokens: &[Token]) -> Self {
        let text = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &source[first.start..last.end],
            _ => "",
        };
        Self {
            text: text.to_string(),
            tokens: tokens.to_vec(),
            score: 0.0,
        }
    }
}

/// One extraction request.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordRequest {
    #[serde(alias = "transcript")]
    pub text: String,
    pub locale: String,
}
