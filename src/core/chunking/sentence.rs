//! Sentence segmentation.
//!
//! A sentence ends at `.`, `!` or `?` when the mark is followed by
//! at least one whitespace character. This is a heuristic:
//! abbreviations such as "Dr. Smith" or "U.S. law" and decimals
//! followed by a space are split as if they ended a sentence.

use once_cell::sync::Lazy;
use regex::Regex;

// Terminal mark plus the whitespace run that follows it
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split text into trimmed, non-empty sentences.
///
/// The split point falls directly after the punctuation mark, so
/// each sentence keeps its terminal mark. Original casing and
/// punctuation are preserved.
///
/// # Example
///
/// ```
/// use lexis::core::chunking::split_sentences;
///
/// let sentences = split_sentences("Hello there! How are you?  Fine.");
/// assert_eq!(sentences, vec!["Hello there!", "How are you?", "Fine."]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Terminal marks are single-byte ASCII
        let end = m.start() + 1;
        push_trimmed(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
