//! Notekeys — keyword extraction for voice-note transcripts.
//!
//! Reads JSON lines (`{"id": ..., "text": ..., "locale": ...}`) and writes
//! one JSON line of keywords per input line. Logs go to stderr.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use notekeys_core::{DataPaths, ExtractorConfig, StopwordSet};
use notekeys_extract::{KeywordExtractor, KeywordRequest};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One input line: a keyword request plus an optional caller id echoed back.
#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(flatten)]
    request: KeywordRequest,
}

#[derive(Debug, Serialize)]
struct OutputRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<serde_json::Value>,
    locale: String,
    keywords: Vec<String>,
}

/// Asset layout under `$NOTEKEYS_DATA_DIR`, else the first of `<exe>/../data`
/// or `./data` that holds a stopword dictionary.
fn resolve_data_paths() -> DataPaths {
    if let Ok(dir) = std::env::var("NOTEKEYS_DATA_DIR") {
        return DataPaths::new(dir);
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| DataPaths::new(dir.join("../data"))));
    beside_exe
        .filter(|paths| paths.stopwords_file.exists())
        .unwrap_or_else(|| DataPaths::new("data"))
}

fn build_extractor(paths: &DataPaths) -> anyhow::Result<KeywordExtractor> {
    let stopwords = if paths.stopwords_file.exists() {
        StopwordSet::load(&paths.stopwords_file)
            .with_context(|| format!("loading {}", paths.stopwords_file.display()))?
    } else {
        warn!(
            "No stopword dictionary at {}; phrases split on short tokens only",
            paths.stopwords_file.display()
        );
        StopwordSet::empty()
    };

    let config = ExtractorConfig::load(&paths.config_file)?;
    let oracle = notekeys_oracle::create_oracle(&paths.frequency_dir);

    Ok(KeywordExtractor::new(stopwords, oracle).with_config(config))
}

/// Process every line of `input`, writing results to `output`.
/// Malformed lines are logged and skipped. Returns the number processed.
fn run(
    extractor: &KeywordExtractor,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<usize> {
    let mut processed = 0;
    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: InputRecord = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping line {}: {}", lineno + 1, e);
                continue;
            }
        };

        let keywords = extractor.extract_request(&record.request);
        let out = OutputRecord {
            id: record.id,
            locale: record.request.locale,
            keywords,
        };
        serde_json::to_writer(&mut output, &out)?;
        output.write_all(b"\n")?;
        processed += 1;
    }
    output.flush()?;
    Ok(processed)
}

fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = std::fs::File::open(p).with_context(|| format!("opening {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(std::io::stdin()))),
    }
}

fn print_help() {
    println!("Notekeys — keyword extraction for voice-note transcripts");
    println!();
    println!("Usage: notekeys [extract] [input.jsonl]");
    println!();
    println!("Commands:");
    println!("  extract [file]   Extract keywords from JSON lines (default; stdin if no file or '-')");
    println!("  help             Show this help message");
    println!();
    println!("Input lines:  {{\"id\": ..., \"text\": \"...\", \"locale\": \"en\"}}");
    println!("Data dir:     $NOTEKEYS_DATA_DIR (stopwords.json, frequency/<lang>.json, config.json)");
}

fn main() -> anyhow::Result<()> {
    // Logs to stderr so stdout carries only JSON lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let input_path = match args.get(1).map(String::as_str) {
        None => None,
        Some("--help" | "-h" | "help") => {
            print_help();
            return Ok(());
        }
        Some("extract") => args.get(2).map(PathBuf::from),
        Some(arg) if arg.starts_with('-') && arg != "-" => {
            eprintln!("Unknown option: {}. Use 'notekeys help' for usage.", arg);
            std::process::exit(1);
        }
        Some(path) => Some(PathBuf::from(path)),
    };

    let paths = resolve_data_paths();
    info!("Data directory: {}", paths.root.display());

    let extractor = build_extractor(&paths)?;

    let input = open_input(input_path.as_deref())?;
    let stdout = std::io::stdout();
    let processed = run(&extractor, input, stdout.lock())?;

    let broken = extractor.broken_languages().codes();
    if !broken.is_empty() {
        warn!("Frequency data failed for: {}", broken.join(", "));
    }
    info!("Processed {} transcripts", processed);

    Ok(())
}
