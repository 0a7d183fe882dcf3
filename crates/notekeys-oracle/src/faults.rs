//! Languages whose frequency oracle has faulted.
//!
//! Once a language faults it is distrusted for the lifetime of the tracker:
//! the set is append-only and never cleared. Concurrent callers may race to
//! mark the same language; inserts are idempotent, so the worst case is one
//! extra failed lookup per racing caller.

use dashmap::DashSet;
use tracing::warn;

use crate::oracle::OracleError;

/// Append-only set of oracle language codes known to fault.
#[derive(Debug, Default)]
pub struct BrokenLanguages {
    codes: DashSet<String>,
}

impl BrokenLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_broken(&self, language: &str) -> bool {
        self.codes.contains(language)
    }

    /// Record a fault. Returns `true` if this call newly marked the language.
    pub fn mark(&self, language: &str, err: &OracleError) -> bool {
        let newly = self.codes.insert(language.to_string());
        if newly {
            warn!(
                "Frequency oracle disabled for '{}' after fault: {}",
                language, err.message
            );
        }
        newly
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Snapshot of the broken codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.codes.iter().map(|c| c.key().clone()).collect();
        codes.sort();
        codes
    }
}
