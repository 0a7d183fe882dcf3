//! End-to-end extraction tests through the public `KeywordExtractor` API,
//! using in-memory frequency tables and segmenters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use notekeys_core::StopwordSet;
use notekeys_core::ExtractorConfig;
use notekeys_extract::{KeywordExtractor, Segmenter, Segmenters};
use notekeys_oracle::{BrokenLanguages, FrequencyOracle, NoopOracle, OracleError, TableOracle};

/// Splits on `|`, dropping nothing, so segmentation is explicit in the input.
struct Piped;

impl Segmenter for Piped {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split('|').collect()
    }

    fn name(&self) -> &'static str {
        "piped"
    }
}

/// Supports one language and faults on every lookup.
struct AlwaysFaults {
    language: &'static str,
    calls: AtomicUsize,
}

impl FrequencyOracle for AlwaysFaults {
    fn supports(&self, language: &str) -> bool {
        language == self.language
    }

    fn frequency(&self, _word: &str, language: &str) -> Result<f64, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(OracleError::new(language, "MeCab dictionary not found"))
    }
}

fn stopwords() -> StopwordSet {
    StopwordSet::from_map(vec![
        (
            "en".to_string(),
            vec!["the", "a", "an", "of", "i", "need", "to", "my", "on", "for", "and"],
        ),
        ("zh".to_string(), vec!["明天"]),
        ("th".to_string(), vec!["ที่"]),
    ])
}

fn table(entries: &[(&str, &[(&str, f64)])]) -> TableOracle {
    TableOracle::from_tables(
        entries
            .iter()
            .map(|(lang, words)| {
                let words = words.iter().map(|(w, f)| (w.to_string(), *f)).collect();
                (lang.to_string(), words)
            })
            .collect::<HashMap<_, _>>(),
    )
}

fn english_oracle() -> TableOracle {
    table(&[(
        "en",
        &[
            ("call", 0.0005),
            ("dentist", 0.00001),
            ("appointment", 0.00003),
            ("tuesday", 0.0002),
            ("quick", 0.0002),
            ("brown", 0.0001),
            ("fox", 0.00005),
            ("jumps", 0.00002),
        ],
    )])
}

/// Dictionary-free segmenters, so tests never load jieba.
fn new_extractor(stopwords: StopwordSet, oracle: Arc<dyn FrequencyOracle>) -> KeywordExtractor {
    KeywordExtractor::with_parts(stopwords, oracle, Segmenters::boundary())
}

fn fallback_extractor(stopwords: StopwordSet) -> KeywordExtractor {
    new_extractor(stopwords, Arc::new(NoopOracle))
}

fn piped_segmenters() -> Segmenters {
    Segmenters {
        chinese: Box::new(Piped),
        thai: Box::new(Piped),
    }
}

fn assert_well_formed(text: &str, keywords: &[String]) {
    assert!(keywords.len() <= 3, "too many keywords: {:?}", keywords);
    let lower = text.to_lowercase();
    for k in keywords {
        assert!(lower.contains(&k.to_lowercase()), "{:?} not in {:?}", k, text);
    }
    for (i, a) in keywords.iter().enumerate() {
        for b in keywords.iter().skip(i + 1) {
            let (a, b) = (a.to_lowercase(), b.to_lowercase());
            assert!(!a.contains(&b) && !b.contains(&a), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_english_with_frequency_data() {
    let extractor = new_extractor(stopwords(), Arc::new(english_oracle()));
    let text = "I need to call the dentist appointment line on Tuesday";
    let keywords = extractor.extract(text, "en");

    assert_well_formed(text, &keywords);
    assert!(!keywords.is_empty());
    assert!(keywords.iter().any(|k| k.to_lowercase().contains("dentist")));
}

#[test]
fn test_stopword_only_input_is_empty() {
    let extractor = new_extractor(stopwords(), Arc::new(english_oracle()));
    assert!(extractor.extract("the a an of", "en").is_empty());
    assert!(extractor.extract("", "en").is_empty());
    assert!(extractor.extract("  ...  ", "en").is_empty());
}

#[test]
fn test_single_kanji_is_empty() {
    let oracle = table(&[("ja", &[("火", 0.001)])]);
    let extractor = new_extractor(stopwords(), Arc::new(oracle));
    assert!(extractor.extract("火", "ja").is_empty());
}

#[test]
fn test_long_phrase_is_split_into_windows() {
    let extractor = new_extractor(StopwordSet::empty(), Arc::new(english_oracle()));
    let text = "quick brown fox jumps";

    let candidates = extractor.candidates(text, "en");
    let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["quick brown fox", "brown fox jumps", "quick", "brown", "fox", "jumps"]
    );

    let keywords = extractor.extract(text, "en");
    assert_well_formed(text, &keywords);
    assert!(!keywords.iter().any(|k| k == text));
}

#[test]
fn test_faulting_oracle_falls_back_after_one_failure() {
    let oracle = Arc::new(AlwaysFaults {
        language: "ko",
        calls: AtomicUsize::new(0),
    });
    let extractor = new_extractor(StopwordSet::empty(), oracle.clone());
    let text = "영화 예약 확인하기 토요일 저녁";

    let first = extractor.extract(text, "ko");
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    assert!(extractor.broken_languages().is_broken("ko"));
    assert_well_formed(text, &first);
    // Length heuristic with the fallback gate still yields keywords.
    assert!(!first.is_empty());

    let second = extractor.extract(text, "ko");
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
}

#[test]
fn test_fault_switches_to_fallback_gate() {
    // A 2+2 character phrase scores 0.5 by length: below the IDF gate,
    // at the fallback gate. The gate must reflect the fault seen mid-scoring.
    let oracle = Arc::new(AlwaysFaults {
        language: "ko",
        calls: AtomicUsize::new(0),
    });
    let extractor = new_extractor(StopwordSet::empty(), oracle);
    assert_eq!(extractor.extract("치과 예약", "ko"), vec!["치과 예약"]);
}

#[test]
fn test_shared_fault_tracker() {
    let oracle = Arc::new(AlwaysFaults {
        language: "ko",
        calls: AtomicUsize::new(0),
    });
    let broken = Arc::new(BrokenLanguages::new());
    let first = new_extractor(StopwordSet::empty(), oracle.clone())
        .with_broken_languages(broken.clone());
    let second = new_extractor(StopwordSet::empty(), oracle.clone())
        .with_broken_languages(broken.clone());

    first.extract("영화 예약", "ko");
    second.extract("영화 예약", "ko");
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    assert_eq!(broken.codes(), vec!["ko".to_string()]);
}

#[test]
fn test_unsupported_language_uses_length_heuristic() {
    let extractor = fallback_extractor(StopwordSet::empty());
    let text = "Habari za asubuhi, nenda sokoni kununua mboga";
    let keywords = extractor.extract(text, "sw");

    assert_well_formed(text, &keywords);
    assert_eq!(keywords.len(), 3);
}

#[test]
fn test_keyword_count_never_exceeds_three() {
    let config = ExtractorConfig {
        max_keywords: 5,
        ..ExtractorConfig::default()
    };
    let extractor = fallback_extractor(StopwordSet::empty()).with_config(config);
    let text = "alphabetic bravoing charlies deltaing echoings foxtrots";
    let keywords = extractor.extract(text, "sw");

    assert_eq!(keywords.len(), 3);
    assert_well_formed(text, &keywords);
}

#[test]
fn test_brahmic_tokens_stay_whole() {
    let extractor = fallback_extractor(StopwordSet::empty());
    let text = "कल बाज़ार से सब्ज़ी लानी है";
    let candidates = extractor.candidates(text, "hi");

    assert!(candidates.iter().all(|c| text.contains(&c.text)));
    assert!(candidates.iter().any(|c| c.text == "बाज़ार"));
    assert!(candidates.iter().any(|c| c.text == "सब्ज़ी"));
}

#[test]
fn test_japanese_pipeline() {
    let oracle = table(&[(
        "ja",
        &[
            ("牛乳", 0.00002),
            ("期限", 0.00005),
            ("確認", 0.0003),
            ("来月", 0.0001),
        ],
    )]);
    let extractor = new_extractor(StopwordSet::empty(), Arc::new(oracle));
    let text = "牛乳の期限を確認して、来月切れる";
    let keywords = extractor.extract(text, "ja");

    assert_well_formed(text, &keywords);
    assert_eq!(keywords, vec!["牛乳", "期限", "来月"]);
}

#[test]
fn test_chinese_pipeline() {
    let oracle = table(&[("zh", &[("银行", 0.0001), ("办", 0.001)])]);
    let extractor = KeywordExtractor::with_parts(stopwords(), Arc::new(oracle), piped_segmenters());
    let text = "明天|去|银行|办|信用卡|。";
    let keywords = extractor.extract(text, "zh-Hans");

    // 信用卡 is unknown to the table, so it ranks as very rare. Single
    // characters never survive selection.
    assert_well_formed(text, &keywords);
    assert_eq!(keywords, vec!["信用卡", "银行"]);
}

#[test]
fn test_cantonese_uses_chinese_frequencies() {
    let oracle = table(&[("zh", &[("医生", 0.00003), ("睇", 0.5)])]);
    let extractor =
        KeywordExtractor::with_parts(StopwordSet::empty(), Arc::new(oracle), piped_segmenters());
    let keywords = extractor.extract("我|要|去|睇|医生", "yue");
    assert_eq!(keywords, vec!["医生"]);
}

#[test]
fn test_thai_pipeline() {
    let oracle = table(&[("th", &[("ทะเบียน", 0.0001), ("รถ", 0.002)])]);
    let extractor = KeywordExtractor::with_parts(stopwords(), Arc::new(oracle), piped_segmenters());
    let text = "ต่อ|ทะเบียน|รถ|ที่|ก| |ขนส่ง";
    let keywords = extractor.extract(text, "th");

    assert_well_formed(text, &keywords);
    assert!(keywords.contains(&"ทะเบียน".to_string()));
    assert!(!keywords.contains(&"ที่".to_string()));
    assert!(!keywords.contains(&"ก".to_string()));
}

#[test]
fn test_boundary_segmenter_fallback_for_chinese() {
    let extractor = fallback_extractor(StopwordSet::empty());
    let text = "空调维修，下午三点";
    let keywords = extractor.extract(text, "zh");
    assert_well_formed(text, &keywords);
    assert_eq!(keywords, vec!["空调维修", "下午三点"]);
}

#[test]
fn test_extraction_is_idempotent() {
    let extractor = new_extractor(stopwords(), Arc::new(english_oracle()));
    let text = "Remind me to call the dentist about my appointment on Tuesday";
    assert_eq!(extractor.extract(text, "en"), extractor.extract(text, "en"));
}

#[test]
fn test_batch_preserves_order() {
    let extractor = new_extractor(stopwords(), Arc::new(english_oracle()));
    let requests: Vec<notekeys_extract::KeywordRequest> = serde_json::from_str(
        r#"[
            {"text": "the a an of", "locale": "en"},
            {"transcript": "dentist appointment", "locale": "en"}
        ]"#,
    )
    .unwrap();

    let results = extractor.extract_batch(&requests);
    assert_eq!(results.len(), 2);
    assert!(results[0].is_empty());
    assert_eq!(results[1], vec!["dentist appointment"]);
}

#[test]
fn test_concurrent_extraction() {
    let oracle = Arc::new(AlwaysFaults {
        language: "ko",
        calls: AtomicUsize::new(0),
    });
    let extractor = Arc::new(new_extractor(StopwordSet::empty(), oracle.clone()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = extractor.clone();
            std::thread::spawn(move || extractor.extract("영화 예약 확인하기", "ko"))
        })
        .collect();
    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    // Racing threads may each see one fault before the mark lands.
    assert!(oracle.calls.load(Ordering::SeqCst) <= 4);
}
