//! Word segmenters for scripts written without spaces.
//!
//! The `Segmenter` trait abstracts over segmentation backends.
//! Implementations:
//! - `JiebaSegmenter`: jieba dictionary + HMM segmentation for Chinese (`chinese` feature)
//! - `ThaiDictionarySegmenter`: ICU4X dictionary segmentation for Thai (`thai` feature)
//! - `BoundarySegmenter`: splits at word/non-word boundaries only, used when
//!   no dictionary backend is compiled in

use tracing::info;

use crate::tokenize::word_boundaries;

/// Trait for segmentation backends.
///
/// Returned segments are slices of `text` and concatenate back to it;
/// whitespace and punctuation come back as their own segments.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn name(&self) -> &'static str;
}

/// Fallback segmenter: word runs and the gaps between them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundarySegmenter;

impl Segmenter for BoundarySegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        word_boundaries(text)
    }

    fn name(&self) -> &'static str {
        "boundary"
    }
}

#[cfg(feature = "chinese")]
mod chinese {
    use jieba_rs::Jieba;

    use super::Segmenter;

    /// Chinese word segmentation with jieba's default dictionary and HMM
    /// for out-of-vocabulary words.
    pub struct JiebaSegmenter {
        jieba: Jieba,
    }

    impl JiebaSegmenter {
        pub fn new() -> Self {
            Self {
                jieba: Jieba::new(),
            }
        }
    }

    impl Default for JiebaSegmenter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Segmenter for JiebaSegmenter {
        fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
            self.jieba.cut(text, true)
        }

        fn name(&self) -> &'static str {
            "jieba"
        }
    }
}

#[cfg(feature = "chinese")]
pub use chinese::JiebaSegmenter;

#[cfg(feature = "thai")]
mod thai {
    use icu_segmenter::WordSegmenter;

    use super::Segmenter;

    /// Thai dictionary (maximal-matching) segmentation from ICU4X compiled data.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ThaiDictionarySegmenter;

    impl Segmenter for ThaiDictionarySegmenter {
        fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
            // Built per call: the payloads are static compiled data.
            let segmenter = WordSegmenter::new_dictionary();
            let breaks: Vec<usize> = segmenter.segment_str(text).collect();
            breaks.windows(2).map(|w| &text[w[0]..w[1]]).collect()
        }

        fn name(&self) -> &'static str {
            "icu-dictionary"
        }
    }
}

#[cfg(feature = "thai")]
pub use thai::ThaiDictionarySegmenter;

/// The segmenters used by the Chinese and Thai paths.
pub struct Segmenters {
    pub chinese: Box<dyn Segmenter>,
    pub thai: Box<dyn Segmenter>,
}

impl Segmenters {
    /// Boundary splitting for both paths. Needs no dictionary.
    pub fn boundary() -> Self {
        Self {
            chinese: Box::new(BoundarySegmenter),
            thai: Box::new(BoundarySegmenter),
        }
    }

    /// Pick the best backends compiled into this build.
    pub fn detect() -> Self {
        #[cfg(feature = "chinese")]
        let chinese: Box<dyn Segmenter> = Box::new(JiebaSegmenter::new());
        #[cfg(not(feature = "chinese"))]
        let chinese: Box<dyn Segmenter> = Box::new(BoundarySegmenter);

        #[cfg(feature = "thai")]
        let thai: Box<dyn Segmenter> = Box::new(ThaiDictionarySegmenter);
        #[cfg(not(feature = "thai"))]
        let thai: Box<dyn Segmenter> = Box::new(BoundarySegmenter);

        info!(
            "Segmenters: chinese={} thai={}",
            chinese.name(),
            thai.name()
        );
        Self { chinese, thai }
    }
}

impl Default for Segmenters {
    fn default() -> Self {
        Self::detect()
    }
}
