//! Frequency oracle backed by per-language JSON tables.
//!
//! Expects one file per language in the frequency directory:
//! `frequency_dir/<lang>.json`, a JSON object mapping words to their corpus
//! frequency in `[0, 1]`. The set of supported languages is fixed when the
//! directory is opened; each table is parsed on its first lookup, so a
//! missing or corrupt table surfaces as an `OracleError` at query time.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use notekeys_core::{Error, Result};
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::oracle::{FrequencyOracle, OracleError};

type Table = Arc<HashMap<String, f64>>;

/// Lazily loaded per-language frequency tables.
pub struct TableOracle {
    dir: Option<PathBuf>,
    languages: HashSet<String>,
    tables: RwLock<HashMap<String, Table>>,
}

impl TableOracle {
    /// Index the `*.json` files in `frequency_dir`. Tables are not read yet.
    pub fn open(frequency_dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(frequency_dir).map_err(|e| {
            Error::Oracle(format!("cannot list {}: {}", frequency_dir.display(), e))
        })?;

        let mut languages = HashSet::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(lang) = path.file_stem().and_then(|s| s.to_str()) {
                languages.insert(lang.to_string());
            }
        }

        debug!(
            "Indexed {} frequency tables in {}",
            languages.len(),
            frequency_dir.display()
        );

        Ok(Self {
            dir: Some(frequency_dir.to_path_buf()),
            languages,
            tables: RwLock::new(HashMap::new()),
        })
    }

    /// Build from in-memory tables. Words are lowercased.
    pub fn from_tables(tables: HashMap<String, HashMap<String, f64>>) -> Self {
        let languages = tables.keys().cloned().collect();
        let tables = tables
            .into_iter()
            .map(|(lang, words)| (lang, Arc::new(lowercase_keys(words))))
            .collect();
        Self {
            dir: None,
            languages,
            tables: RwLock::new(tables),
        }
    }

    /// Supported language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    fn table(&self, language: &str) -> std::result::Result<Table, OracleError> {
        if let Some(table) = self.tables.read().get(language) {
            return Ok(table.clone());
        }

        let table = Arc::new(self.load_table(language)?);
        // A racing loader may have inserted first; either copy is identical.
        self.tables
            .write()
            .entry(language.to_string())
            .or_insert_with(|| table.clone());
        Ok(table)
    }

    fn load_table(&self, language: &str) -> std::result::Result<HashMap<String, f64>, OracleError> {
        let dir = self
            .dir
            .as_ref()
            .ok_or_else(|| OracleError::new(language, "no table loaded"))?;
        let path = dir.join(format!("{}.json", language));

        let json = std::fs::read_to_string(&path)
            .map_err(|e| OracleError::new(language, format!("{}: {}", path.display(), e)))?;
        let words: HashMap<String, f64> = serde_json::from_str(&json)
            .map_err(|e| OracleError::new(language, format!("{}: {}", path.display(), e)))?;

        if let Some((word, freq)) = words
            .iter()
            .find(|(_, f)| !(0.0..=1.0).contains(*f))
        {
            return Err(OracleError::new(
                language,
                format!("frequency {} for '{}' is outside [0, 1]", freq, word),
            ));
        }

        info!("Loaded {} frequencies for '{}'", words.len(), language);
        Ok(lowercase_keys(words))
    }
}

fn lowercase_keys(words: HashMap<String, f64>) -> HashMap<String, f64> {
    let mut out = HashMap::with_capacity(words.len());
    for (word, freq) in words {
        // Case variants collapse onto the most frequent spelling.
        let slot = out.entry(word.to_lowercase()).or_insert(0.0);
        if freq > *slot {
            *slot = freq;
        }
    }
    out
}

impl FrequencyOracle for TableOracle {
    fn supports(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    fn frequency(&self, word: &str, language: &str) -> std::result::Result<f64, OracleError> {
        if !self.supports(language) {
            return Err(OracleError::new(language, "unsupported language"));
        }
        let table = self.table(language)?;
        Ok(table.get(&word.to_lowercase()).copied().unwrap_or(0.0))
    }
}
