//! The keyword extraction entry point.

use std::sync::Arc;

use notekeys_core::{ExtractorConfig, Locale, StopwordSet};
use notekeys_oracle::{BrokenLanguages, FrequencyOracle, NoopOracle};
use tracing::debug;

use crate::extract::generate_candidates;
use crate::scoring::Scorer;
use crate::segment::Segmenters;
use crate::select::select_keywords;
use crate::types::{Candidate, KeywordRequest};

/// Extracts keywords from transcripts.
///
/// Holds the read-only assets (stopwords, oracle, segmenters, config) and
/// the broken-language tracker. Shareable across threads; every extraction
/// is independent apart from faults recorded in the tracker.
pub struct KeywordExtractor {
    stopwords: StopwordSet,
    oracle: Arc<dyn FrequencyOracle>,
    broken: Arc<BrokenLanguages>,
    segmenters: Segmenters,
    config: ExtractorConfig,
}

impl KeywordExtractor {
    /// Extractor using the best segmenters compiled into this build.
    pub fn new(stopwords: StopwordSet, oracle: Arc<dyn FrequencyOracle>) -> Self {
        Self::with_parts(stopwords, oracle, Segmenters::detect())
    }

    /// Extractor with explicit segmenters. Skips backend detection, which
    /// loads the jieba dictionary when the `chinese` feature is on.
    pub fn with_parts(
        stopwords: StopwordSet,
        oracle: Arc<dyn FrequencyOracle>,
        segmenters: Segmenters,
    ) -> Self {
        Self {
            stopwords,
            oracle,
            broken: Arc::new(BrokenLanguages::new()),
            segmenters,
            config: ExtractorConfig::default(),
        }
    }

    /// Extractor with no frequency data: every language uses the length heuristic.
    pub fn without_oracle(stopwords: StopwordSet) -> Self {
        Self::new(stopwords, Arc::new(NoopOracle))
    }

    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the segmenters. Prefer [`KeywordExtractor::with_parts`] when
    /// the default ones are never needed.
    pub fn with_segmenters(mut self, segmenters: Segmenters) -> Self {
        self.segmenters = segmenters;
        self
    }

    /// Share a fault tracker with other extractors using the same oracle.
    pub fn with_broken_languages(mut self, broken: Arc<BrokenLanguages>) -> Self {
        self.broken = broken;
        self
    }

    pub fn broken_languages(&self) -> &BrokenLanguages {
        &self.broken
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn scorer(&self) -> Scorer<'_> {
        Scorer::new(self.oracle.as_ref(), &self.broken, &self.config)
    }

    /// Scored candidates for `text`, before selection.
    pub fn candidates(&self, text: &str, locale: &str) -> Vec<Candidate> {
        let locale = Locale::from(locale);
        let path = locale.path();
        let scorer = self.scorer();
        let stopwords = self.stopwords.get(locale.as_str());

        debug!("Extracting keywords for '{}' via {} path", locale, path);
        generate_candidates(
            path,
            text,
            locale.as_str(),
            stopwords,
            &self.segmenters,
            &scorer,
            &self.config,
        )
    }

    /// Up to `max_keywords` keywords, each a substring of `text`.
    /// Never fails: degenerate input or missing data yields fewer or none.
    pub fn extract(&self, text: &str, locale: &str) -> Vec<String> {
        let candidates = self.candidates(text, locale);

        // Checked after generation: scoring may have just marked the language broken.
        let has_oracle = self.scorer().has_oracle(locale);

        select_keywords(candidates, self.config.max_keywords, has_oracle, &self.config)
    }

    pub fn extract_request(&self, request: &KeywordRequest) -> Vec<String> {
        self.extract(&request.text, &request.locale)
    }

    /// Extract keywords for each request, in order.
    pub fn extract_batch(&self, requests: &[KeywordRequest]) -> Vec<Vec<String>> {
        requests.iter().map(|r| self.extract_request(r)).collect()
    }
}
