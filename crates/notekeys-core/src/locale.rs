//! Locale identifiers and per-locale pipeline dispatch.

use serde::{Deserialize, Serialize};

/// An opaque locale identifier such as `en`, `zh-Hant` or `yue`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language part of the locale: everything before the first `-`.
    pub fn base(&self) -> &str {
        base_language(&self.0)
    }

    /// Which candidate generator handles this locale.
    pub fn path(&self) -> LanguagePath {
        LanguagePath::classify(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything before the first `-` of a locale string.
pub fn base_language(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Candidate generation strategy, resolved once per extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePath {
    /// Stopword-delimited phrases over word/mark tokens (space-delimited and Brahmic scripts).
    Generic,
    /// Kanji/katakana script runs.
    Japanese,
    /// Externally segmented Mandarin or Cantonese.
    Chinese,
    /// Externally segmented Thai.
    Thai,
}

impl LanguagePath {
    pub fn classify(locale: &str) -> Self {
        match locale {
            "ja" => Self::Japanese,
            "zh" | "zh-Hans" | "zh-Hant" | "yue" => Self::Chinese,
            "th" => Self::Thai,
            _ => Self::Generic,
        }
    }
}

impl std::fmt::Display for LanguagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Japanese => write!(f, "japanese"),
            Self::Chinese => write!(f, "chinese"),
            Self::Thai => write!(f, "thai"),
        }
    }
}
