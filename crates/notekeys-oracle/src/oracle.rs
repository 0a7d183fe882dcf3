//! Frequency oracle trait and the no-data implementation.

use thiserror::Error;

/// A lookup failed for reasons other than "word unknown", typically
/// because the backing data for the language is missing or corrupt.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("frequency lookup failed for language '{language}': {message}")]
pub struct OracleError {
    pub language: String,
    pub message: String,
}

impl OracleError {
    pub fn new(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            message: message.into(),
        }
    }
}

/// Trait for word frequency backends.
pub trait FrequencyOracle: Send + Sync {
    /// Whether the oracle has data for this exact language code.
    fn supports(&self, language: &str) -> bool;

    /// Corpus frequency of `word` in `language`, in `[0, 1]`.
    /// Zero means the word is unknown to the corpus.
    fn frequency(&self, word: &str, language: &str) -> Result<f64, OracleError>;
}

/// Oracle with no data: supports no language.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOracle;

impl FrequencyOracle for NoopOracle {
    fn supports(&self, _language: &str) -> bool {
        false
    }

    fn frequency(&self, _word: &str, language: &str) -> Result<f64, OracleError> {
        Err(OracleError::new(language, "no frequency data loaded"))
    }
}
