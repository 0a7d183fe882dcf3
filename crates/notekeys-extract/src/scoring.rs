//! Rarity scoring: IDF from the frequency oracle, or a length heuristic.
//!
//! Oracle faults never escape this module. A faulting language is recorded
//! in [`BrokenLanguages`] and treated as unsupported from then on.

use std::collections::HashSet;

use notekeys_core::locale::base_language;
use notekeys_core::ExtractorConfig;
use notekeys_oracle::{BrokenLanguages, FrequencyOracle};

use crate::tokenize::char_len;

/// Cantonese shares the Chinese frequency table.
const CANTONESE: &str = "yue";
const CHINESE: &str = "zh";

/// Scores words against one oracle and fault tracker.
pub struct Scorer<'a> {
    oracle: &'a dyn FrequencyOracle,
    broken: &'a BrokenLanguages,
    config: &'a ExtractorConfig,
}

impl<'a> Scorer<'a> {
    pub fn new(
        oracle: &'a dyn FrequencyOracle,
        broken: &'a BrokenLanguages,
        config: &'a ExtractorConfig,
    ) -> Self {
        Self {
            oracle,
            broken,
            config,
        }
    }

    /// Map a locale onto an oracle language code: exact, then base
    /// language, then the Cantonese alias.
    pub fn resolve_language<'l>(&self, locale: &'l str) -> Option<&'l str> {
        if self.oracle.supports(locale) {
            return Some(locale);
        }
        let base = base_language(locale);
        if self.oracle.supports(base) {
            return Some(base);
        }
        if locale == CANTONESE && self.oracle.supports(CHINESE) {
            return Some(CHINESE);
        }
        None
    }

    /// Resolved oracle code, unless that code has faulted before.
    fn usable_language<'l>(&self, locale: &'l str) -> Option<&'l str> {
        self.resolve_language(locale)
            .filter(|code| !self.broken.is_broken(code))
    }

    /// Whether IDF scores are currently obtainable for `locale`.
    pub fn has_oracle(&self, locale: &str) -> bool {
        self.usable_language(locale).is_some()
    }

    /// Corpus frequency, or `None` if unsupported or faulting.
    fn frequency(&self, word: &str, locale: &str) -> Option<f64> {
        let code = self.usable_language(locale)?;
        match self.oracle.frequency(&word.to_lowercase(), code) {
            Ok(freq) => Some(freq),
            Err(e) => {
                self.broken.mark(code, &e);
                None
            }
        }
    }

    /// `-log10(frequency)`; higher means rarer. Words the corpus has never
    /// seen get `default_idf`.
    pub fn idf_score(&self, word: &str, locale: &str) -> Option<f64> {
        let freq = self.frequency(word, locale)?;
        if freq <= 0.0 {
            Some(self.config.default_idf)
        } else {
            Some(-freq.log10())
        }
    }

    /// IDF, or `default_idf` when the oracle cannot answer.
    pub fn idf_or_default(&self, word: &str, locale: &str) -> f64 {
        self.idf_score(word, locale)
            .unwrap_or(self.config.default_idf)
    }

    /// True when the oracle knows `word` (frequency above zero).
    pub fn recognizes(&self, word: &str, locale: &str) -> bool {
        self.frequency(word, locale).is_some_and(|f| f > 0.0)
    }

    /// Heuristic for languages without frequency data: stopwords score 0,
    /// other words score by character length up to a cap.
    pub fn fallback_score(&self, word: &str, stopwords: &HashSet<String>) -> f64 {
        if stopwords.contains(&word.to_lowercase()) {
            return 0.0;
        }
        let len = char_len(word) as f64;
        (len / self.config.fallback_length_divisor).min(self.config.fallback_length_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notekeys_oracle::{NoopOracle, OracleError, TableOracle};
    use std::collections::HashMap;

    fn oracle() -> TableOracle {
        let en = HashMap::from([
            ("the".to_string(), 0.05),
            ("dentist".to_string(), 0.00001),
        ]);
        let zh = HashMap::from([("银行".to_string(), 0.0001)]);
        TableOracle::from_tables(HashMap::from([
            ("en".to_string(), en),
            ("zh".to_string(), zh),
        ]))
    }

    struct Faulty;

    impl FrequencyOracle for Faulty {
        fn supports(&self, language: &str) -> bool {
            language == "ko"
        }

        fn frequency(&self, _word: &str, language: &str) -> Result<f64, OracleError> {
            Err(OracleError::new(language, "dictionary missing"))
        }
    }

    #[test]
    fn test_resolve_language() {
        let oracle = oracle();
        let broken = BrokenLanguages::new();
        let config = ExtractorConfig::default();
        let scorer = Scorer::new(&oracle, &broken, &config);

        assert_eq!(scorer.resolve_language("en"), Some("en"));
        assert_eq!(scorer.resolve_language("en-US"), Some("en"));
        assert_eq!(scorer.resolve_language("zh-Hant"), Some("zh"));
        assert_eq!(scorer.resolve_language("yue"), Some("zh"));
        assert_eq!(scorer.resolve_language("sw"), None);
    }

    #[test]
    fn test_idf_score() {
        let oracle = oracle();
        let broken = BrokenLanguages::new();
        let config = ExtractorConfig::default();
        let scorer = Scorer::new(&oracle, &broken, &config);

        let the = scorer.idf_score("The", "en").unwrap();
        assert!((the - 1.301).abs() < 0.001);
        let dentist = scorer.idf_score("dentist", "en").unwrap();
        assert!((dentist - 5.0).abs() < 1e-9);
        assert_eq!(scorer.idf_score("zyzzyva", "en"), Some(7.0));
        assert_eq!(scorer.idf_score("hello", "sw"), None);
    }

    #[test]
    fn test_fault_marks_language_broken() {
        let oracle = Faulty;
        let broken = BrokenLanguages::new();
        let config = ExtractorConfig::default();
        let scorer = Scorer::new(&oracle, &broken, &config);

        assert!(scorer.has_oracle("ko"));
        assert_eq!(scorer.idf_score("영화", "ko"), None);
        assert!(broken.is_broken("ko"));
        assert!(!scorer.has_oracle("ko"));
        assert_eq!(scorer.idf_or_default("영화", "ko"), 7.0);
    }

    #[test]
    fn test_recognizes() {
        let oracle = oracle();
        let broken = BrokenLanguages::new();
        let config = ExtractorConfig::default();
        let scorer = Scorer::new(&oracle, &broken, &config);

        assert!(scorer.recognizes("dentist", "en"));
        assert!(!scorer.recognizes("zyzzyva", "en"));
        assert!(!scorer.recognizes("dentist", "sw"));
    }

    #[test]
    fn test_fallback_score() {
        let oracle = NoopOracle;
        let broken = BrokenLanguages::new();
        let config = ExtractorConfig::default();
        let scorer = Scorer::new(&oracle, &broken, &config);
        let stopwords: HashSet<String> = ["na".to_string()].into_iter().collect();

        assert_eq!(scorer.fallback_score("Na", &stopwords), 0.0);
        assert_eq!(scorer.fallback_score("ab", &stopwords), 0.5);
        assert_eq!(scorer.fallback_score("abcd", &stopwords), 1.0);
        assert_eq!(scorer.fallback_score("abcdefgh", &stopwords), 2.0);
        assert_eq!(scorer.fallback_score("abcdefghijklmnop", &stopwords), 2.0);
        // Characters, not bytes.
        assert_eq!(scorer.fallback_score("மருந்து", &stopwords), 7.0 / 4.0);
    }
}
