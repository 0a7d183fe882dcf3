//! Japanese keyword candidates from kanji and katakana script runs.
//!
//! Hiragana and everything outside the CJK blocks only separate runs; they
//! are never part of a candidate. The full-width long vowel mark extends a
//! katakana run and separates otherwise; the half-width mark is plain katakana.

use tracing::debug;

use crate::script::{char_script, is_long_vowel_mark, Script};
use crate::scoring::Scorer;
use crate::tokenize::char_len;
use crate::types::Candidate;

const JAPANESE: &str = "ja";

/// Scanner state: idle, or inside a run starting at a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Kanji { start: usize },
    Katakana { start: usize },
}

impl RunState {
    fn script(self) -> Option<Script> {
        match self {
            Self::Idle => None,
            Self::Kanji { .. } => Some(Script::Kanji),
            Self::Katakana { .. } => Some(Script::Katakana),
        }
    }

    fn start(script: Script, at: usize) -> Self {
        match script {
            Script::Kanji => Self::Kanji { start: at },
            Script::Katakana => Self::Katakana { start: at },
            Script::Hiragana | Script::Other => Self::Idle,
        }
    }
}

/// Generate and score candidates from Japanese text.
pub fn candidates(text: &str, scorer: &Scorer<'_>) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut state = RunState::Idle;

    for (i, ch) in text.char_indices() {
        let mut script = char_script(ch);
        if is_long_vowel_mark(ch) {
            script = if state.script() == Some(Script::Katakana) {
                Script::Katakana
            } else {
                Script::Other
            };
        }

        if state.script() == Some(script) {
            continue;
        }
        flush(text, state, i, scorer, &mut candidates);
        state = RunState::start(script, i);
    }
    flush(text, state, text.len(), scorer, &mut candidates);

    for candidate in &mut candidates {
        candidate.score = scorer.idf_or_default(&candidate.text, JAPANESE);
    }

    debug!("japanese: {} candidates", candidates.len());
    candidates
}

/// Emit the run ending at byte offset `end`, if any.
fn flush(text: &str, state: RunState, end: usize, scorer: &Scorer<'_>, out: &mut Vec<Candidate>) {
    match state {
        RunState::Idle => {}
        RunState::Katakana { start } => out.push(Candidate::new(&text[start..end])),
        RunState::Kanji { start } => flush_kanji(&text[start..end], scorer, out),
    }
}

/// Single kanji are dropped. Pairs are kept. Longer runs are kept whole if
/// the oracle knows them, else split into the adjacent pairs it knows.
fn flush_kanji(run: &str, scorer: &Scorer<'_>, out: &mut Vec<Candidate>) {
    match char_len(run) {
        0 | 1 => {}
        2 => out.push(Candidate::new(run)),
        _ if scorer.recognizes(run, JAPANESE) => out.push(Candidate::new(run)),
        _ => {
            let bounds: Vec<usize> = run
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(run.len()))
                .collect();
            for w in bounds.windows(3) {
                let bigram = &run[w[0]..w[2]];
                if scorer.recognizes(bigram, JAPANESE) {
                    out.push(Candidate::new(bigram));
                }
            }
        }
    }
}
