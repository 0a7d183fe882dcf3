//! Notekeys Core — shared types, configuration, stopwords and errors.

pub mod config;
pub mod error;
pub mod locale;
pub mod stopwords;

pub use config::{DataPaths, ExtractorConfig, MAX_KEYWORDS};
pub use error::{Error, Result};
pub use locale::{LanguagePath, Locale};
pub use stopwords::StopwordSet;
