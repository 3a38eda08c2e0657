//! Text measurement helpers

/// Average adult reading speed used for the estimate. Not configurable.
const WORDS_PER_MINUTE: usize = 225;

/// Count whitespace-separated words in a text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate reading time in whole minutes, never below one minute.
pub fn reading_time(text: &str) -> u32 {
    let words = word_count(text);
    let minutes = (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE;
    minutes.max(1) as u32
}
