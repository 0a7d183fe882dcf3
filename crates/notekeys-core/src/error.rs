//! Error types for Notekeys.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Stopword error: {0}")]
    Stopwords(String),

    #[error("Frequency oracle error: {0}")]
    Oracle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
