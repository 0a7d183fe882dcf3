//! Per-locale stopword sets.
//!
//! The dictionary is a JSON object mapping a locale (or bare language code)
//! to a list of words. Words are lowercased on load; lookups fall back from
//! the exact locale to its base language, then to the empty set.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::info;

use crate::error::{Error, Result};
use crate::locale::base_language;

static EMPTY: Lazy<HashSet<String>> = Lazy::new(HashSet::new);

/// Read-only stopword dictionary, loaded once and shared across extractions.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    by_locale: HashMap<String, HashSet<String>>,
}

impl StopwordSet {
    /// An empty dictionary: every locale resolves to no stopwords.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an already-parsed `locale → words` mapping.
    pub fn from_map<I, W>(raw: I) -> Self
    where
        I: IntoIterator<Item = (String, W)>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        let by_locale = raw
            .into_iter()
            .map(|(locale, words)| {
                let set = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
                (locale, set)
            })
            .collect();
        Self { by_locale }
    }

    /// Parse a JSON dictionary (`{"en": ["the", ...], ...}`).
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| Error::Stopwords(format!("invalid stopword dictionary: {}", e)))?;
        Ok(Self::from_map(raw))
    }

    /// Load a JSON dictionary from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let set = Self::from_json(&json)?;
        info!(
            "Loaded stopwords for {} locales from {}",
            set.by_locale.len(),
            path.display()
        );
        Ok(set)
    }

    /// Stopwords for `locale`, falling back to its base language, then to none.
    pub fn get(&self, locale: &str) -> &HashSet<String> {
        if let Some(words) = self.by_locale.get(locale) {
            return words;
        }
        self.by_locale
            .get(base_language(locale))
            .unwrap_or(&*EMPTY)
    }

    /// Case-insensitive membership test against the resolved set for `locale`.
    pub fn is_stopword(&self, locale: &str, word: &str) -> bool {
        self.get(locale).contains(&word.to_lowercase())
    }

    /// Number of locales with a stopword list.
    pub fn len(&self) -> usize {
        self.by_locale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_locale.is_empty()
    }
}
