//! Extraction tuning and data directory layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// IDF assigned to words the frequency table has never seen (very rare).
pub const DEFAULT_IDF: f64 = 7.0;
/// Minimum IDF for a keyword when frequency data exists (frequency < 1%).
pub const MIN_IDF: f64 = 2.0;
/// Minimum score for a keyword scored by the length heuristic.
pub const FALLBACK_MIN_SCORE: f64 = 0.5;
/// Hard ceiling on keywords per transcript; `max_keywords` may only lower it.
pub const MAX_KEYWORDS: usize = 3;

/// Paths to the assets the extractor reads at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Stopword dictionary (`data/stopwords.json`).
    pub stopwords_file: PathBuf,
    /// Per-language frequency tables (`data/frequency/<lang>.json`).
    pub frequency_dir: PathBuf,
    /// Extractor tuning (`data/config.json`).
    pub config_file: PathBuf,
}

impl DataPaths {
    /// Derive all asset paths from a root directory. Nothing is created or checked.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            stopwords_file: root.join("stopwords.json"),
            frequency_dir: root.join("frequency"),
            config_file: root.join("config.json"),
            root,
        }
    }
}

/// Keyword extraction tuning. Every field has a default, so a partial
/// `config.json` only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum keywords returned per transcript.
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,
    /// Confidence gate for languages with frequency data.
    #[serde(default = "default_min_idf")]
    pub min_idf: f64,
    /// Confidence gate for languages scored by the length heuristic.
    #[serde(default = "default_fallback_min_score")]
    pub fallback_min_score: f64,
    /// Longest keyword, in characters.
    #[serde(default = "default_max_keyword_chars")]
    pub max_keyword_chars: usize,
    /// Shortest keyword, in characters.
    #[serde(default = "default_min_keyword_chars")]
    pub min_keyword_chars: usize,
    /// Phrases longer than this are split into sliding windows of this many tokens.
    #[serde(default = "default_max_phrase_tokens")]
    pub max_phrase_tokens: usize,
    /// IDF for words with zero corpus frequency.
    #[serde(default = "default_idf")]
    pub default_idf: f64,
    /// Length heuristic: characters per score point.
    #[serde(default = "default_fallback_length_divisor")]
    pub fallback_length_divisor: f64,
    /// Length heuristic: maximum score.
    #[serde(default = "default_fallback_length_cap")]
    pub fallback_length_cap: f64,
}

fn default_max_keywords() -> usize {
    MAX_KEYWORDS
}
fn default_min_idf() -> f64 {
    MIN_IDF
}
fn default_fallback_min_score() -> f64 {
    FALLBACK_MIN_SCORE
}
fn default_max_keyword_chars() -> usize {
    30
}
fn default_min_keyword_chars() -> usize {
    2
}
fn default_max_phrase_tokens() -> usize {
    3
}
fn default_idf() -> f64 {
    DEFAULT_IDF
}
fn default_fallback_length_divisor() -> f64 {
    4.0
}
fn default_fallback_length_cap() -> f64 {
    2.0
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_keywords: default_max_keywords(),
            min_idf: default_min_idf(),
            fallback_min_score: default_fallback_min_score(),
            max_keyword_chars: default_max_keyword_chars(),
            min_keyword_chars: default_min_keyword_chars(),
            max_phrase_tokens: default_max_phrase_tokens(),
            default_idf: default_idf(),
            fallback_length_divisor: default_fallback_length_divisor(),
            fallback_length_cap: default_fallback_length_cap(),
        }
    }
}

impl ExtractorConfig {
    /// Load config from a JSON file, falling back to defaults when the file
    /// is missing or unreadable, then apply environment overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = match std::fs::read_to_string(config_path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!("Ignoring malformed {}: {}", config_path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        info!(
            "Extractor config: max_keywords={} min_idf={}",
            config.max_keywords, config.min_idf
        );
        Ok(config)
    }

    /// Apply `NOTEKEYS_MAX_KEYWORDS` / `NOTEKEYS_MIN_IDF` from a variable lookup.
    /// Unparseable values, and keyword counts above [`MAX_KEYWORDS`], are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(n) = lookup("NOTEKEYS_MAX_KEYWORDS").and_then(|v| v.parse::<usize>().ok()) {
            if n <= MAX_KEYWORDS {
                self.max_keywords = n;
            } else {
                warn!(
                    "Ignoring NOTEKEYS_MAX_KEYWORDS={}: at most {} keywords are returned",
                    n, MAX_KEYWORDS
                );
            }
        }
        if let Some(idf) = lookup("NOTEKEYS_MIN_IDF").and_then(|v| v.parse().ok()) {
            self.min_idf = idf;
        }
    }

    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_keywords > MAX_KEYWORDS {
            return Err(Error::Config(format!(
                "max_keywords ({}) exceeds {}",
                self.max_keywords, MAX_KEYWORDS
            )));
        }
        if self.max_phrase_tokens == 0 {
            return Err(Error::Config("max_phrase_tokens must be at least 1".into()));
        }
        if self.min_keyword_chars > self.max_keyword_chars {
            return Err(Error::Config(format!(
                "min_keyword_chars ({}) exceeds max_keyword_chars ({})",
                self.min_keyword_chars, self.max_keyword_chars
            )));
        }
        if self.fallback_length_divisor.is_nan() || self.fallback_length_divisor <= 0.0 {
            return Err(Error::Config("fallback_length_divisor must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_keywords, 3);
        assert_eq!(config.min_idf, 2.0);
        assert_eq!(config.fallback_min_score, 0.5);
        assert_eq!(config.max_keyword_chars, 30);
        assert_eq!(config.max_phrase_tokens, 3);
        assert_eq!(config.default_idf, 7.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ExtractorConfig = serde_json::from_str(r#"{"max_keywords": 2}"#).unwrap();
        assert_eq!(config.max_keywords, 2);
        assert_eq!(config.min_idf, 2.0);
        assert_eq!(config.fallback_length_cap, 2.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExtractorConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config.max_phrase_tokens, 3);
    }

    #[test]
    fn test_overrides() {
        let mut config = ExtractorConfig::default();
        config.apply_overrides(|key| match key {
            "NOTEKEYS_MAX_KEYWORDS" => Some("2".into()),
            "NOTEKEYS_MIN_IDF" => Some("not-a-number".into()),
            _ => None,
        });
        assert_eq!(config.max_keywords, 2);
        assert_eq!(config.min_idf, 2.0);
    }

    #[test]
    fn test_overrides_ignore_excess_keyword_count() {
        let mut config = ExtractorConfig::default();
        config.apply_overrides(|key| match key {
            "NOTEKEYS_MAX_KEYWORDS" => Some("5".into()),
            _ => None,
        });
        assert_eq!(config.max_keywords, 3);
    }

    #[test]
    fn test_validate_rejects_excess_keyword_count() {
        let config = ExtractorConfig {
            max_keywords: 5,
            ..ExtractorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_rejects_excess_keyword_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_keywords": 5}"#).unwrap();
        assert!(matches!(ExtractorConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = ExtractorConfig {
            max_phrase_tokens: 0,
            ..ExtractorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_data_paths_layout() {
        let paths = DataPaths::new("/srv/notekeys");
        assert_eq!(paths.stopwords_file, Path::new("/srv/notekeys/stopwords.json"));
        assert_eq!(paths.frequency_dir, Path::new("/srv/notekeys/frequency"));
        assert_eq!(paths.config_file, Path::new("/srv/notekeys/config.json"));
    }
}
