//! Notekeys Extract — keyword extraction for short multilingual transcripts.
//!
//! Candidates come from one of four generators chosen by locale, are scored
//! by word rarity (IDF from a frequency oracle, or a length heuristic when no
//! frequency data exists), then ranked, gated and deduplicated. Every keyword
//! is a literal substring of the transcript.

pub mod extract;
pub mod extractor;
pub mod script;
pub mod scoring;
pub mod segment;
pub mod select;
pub mod tokenize;
pub mod types;

pub use extractor::KeywordExtractor;
pub use scoring::Scorer;
pub use segment::{BoundarySegmenter, Segmenter, Segmenters};
pub use select::select_keywords;
pub use types::{Candidate, KeywordRequest, Token};

#[cfg(feature = "chinese")]
pub use segment::JiebaSegmenter;
#[cfg(feature = "thai")]
pub use segment::ThaiDictionarySegmenter;
