// src/domain/content/text.rs
//! Plain-text derivations over stored markup. The stored body is never
//! modified; these work on a stripped copy.

const EXCERPT_WORDS: usize = 30;
const WORDS_PER_MINUTE: usize = 225;

/// Drop everything between `<` and the next `>` (or the end of input).
#[must_use]
pub fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match (in_tag, ch) {
            (false, '<') => in_tag = true,
            (true, '>') => {
                in_tag = false;
                out.push(' ');
            }
            (false, c) => out.push(c),
            (true, _) => {}
        }
    }
    out
}

#[must_use]
pub fn word_count(markup: &str) -> usize {
    strip_markup(markup).split_whitespace().count()
}

/// First 30 words of the stripped body, with "..." appended when cut.
#[must_use]
pub fn excerpt(markup: &str) -> String {
    let plain = strip_markup(markup);
    let words: Vec<&str> = plain.split_whitespace().collect();
    if words.len() > EXCERPT_WORDS {
        format!("{}...", words[..EXCERPT_WORDS].join(" "))
    } else {
        words.join(" ")
    }
}

/// Whole minutes at 225 words per minute, never less than one.
#[must_use]
pub fn reading_time_minutes(markup: &str) -> u32 {
    let minutes = word_count(markup).div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
