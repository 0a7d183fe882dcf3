//! Writing-system classification for Japanese script-run segmentation.

/// Script class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Other,
}

/// Katakana-hiragana prolonged sound mark.
pub const LONG_VOWEL_MARK: char = 'ー';

pub fn char_script(ch: char) -> Script {
    match ch as u32 {
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF => Script::Kanji,
        // CJK radicals
        0x2E80..=0x2EFF | 0x2F00..=0x2FDF => Script::Kanji,
        0x3040..=0x309F => Script::Hiragana,
        // Full-width katakana, then half-width forms.
        0x30A0..=0x30FF | 0xFF66..=0xFF9F => Script::Katakana,
        _ => Script::Other,
    }
}

/// Full-width prolonged sound mark. Its half-width form (U+FF70) sits in the
/// half-width katakana block and always classifies as katakana.
pub fn is_long_vowel_mark(ch: char) -> bool {
    ch == LONG_VOWEL_MARK
}
