//! Dictionary word admissibility and scoring.
//!
//! A word is admissible when it is at least [`MIN_WORD_LENGTH`] ASCII letters
//! long and every `q` in it is followed by a `u`. The board has no separate
//! `q` cube: the `q` cell always reads as "qu", so a word like "qatar" could
//! never be spelled on it.

use crate::MIN_WORD_LENGTH;

/// Normalize a raw dictionary line into its canonical lowercase form.
///
/// Returns `None` for anything the board could never spell: short words,
/// words with non-letters (punctuation, digits, spaces), and words breaking
/// the qu rule.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim_end_matches(['\r', '\n']);

    if word.len() < MIN_WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let word = word.to_ascii_lowercase();
    if !follows_qu_rule(&word) {
        return None;
    }

    Some(word)
}

/// Check that every `q` is immediately followed by `u`.
pub fn follows_qu_rule(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes
        .iter()
        .enumerate()
        .all(|(i, &b)| b != b'q' || bytes.get(i + 1) == Some(&b'u'))
}

/// Points for a single found word, by length.
pub fn score_word(word: &str) -> u32 {
    match word.len() {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Sum of [`score_word`] over the given words.
///
/// Callers pass unique words; duplicates are counted as many times as they
/// appear.
pub fn total_score<I, S>(words: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| score_word(w.as_ref())).sum()
}
