//! Notekeys Oracle — word frequency lookups and fault tracking.
//!
//! Provides the `FrequencyOracle` trait the scorer turns into IDF scores.
//! `TableOracle` serves per-language frequency tables from a data directory.
//! Without one, `NoopOracle` is used and every language falls back to the
//! length heuristic.

pub mod faults;
pub mod oracle;
pub mod table;

pub use faults::BrokenLanguages;
pub use oracle::{FrequencyOracle, NoopOracle, OracleError};
pub use table::TableOracle;

use std::path::Path;
use std::sync::Arc;

/// Create the best available oracle for the given frequency directory.
///
/// Uses the table oracle when the directory can be listed,
/// falls back to NoopOracle.
pub fn create_oracle(frequency_dir: &Path) -> Arc<dyn FrequencyOracle> {
    match TableOracle::open(frequency_dir) {
        Ok(oracle) => {
            tracing::info!(
                "Using frequency tables for {} languages",
                oracle.languages().len()
            );
            Arc::new(oracle)
        }
        Err(e) => {
            tracing::warn!("Frequency tables unavailable: {}. Using length heuristic only.", e);
            Arc::new(NoopOracle)
        }
    }
}
