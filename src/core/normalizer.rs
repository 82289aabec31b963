//! Text normalization and tokenization.
//!
//! Normalized text contains only ASCII lowercase letters, ASCII
//! digits and single spaces, with no leading or trailing space.
//! Punctuation, symbols, emoji and non-ASCII letters are dropped
//! outright rather than replaced with a space, so `"don't"`
//! becomes `"dont"`.
//!
//! All functions here are total: any `&str` is accepted, and the
//! empty string normalizes to the empty string.
//!
//! # Example
//!
//! ```
//! use lexis::core::normalizer::{normalize, tokenize, word_count};
//!
//! assert_eq!(normalize("  Hello, World!!!  "), "hello world");
//! assert_eq!(tokenize("Price: $99.99 (AMAZING Deal!!!)"), vec!["price", "9999", "amazing", "deal"]);
//! assert_eq!(word_count("Python     is     AWESOME!!!"), 3);
//! ```

/// Normalize text into its canonical form.
///
/// Lowercases every character, drops everything that is not
/// `a-z`, `0-9` or whitespace, and collapses whitespace runs into
/// a single space. Leading and trailing whitespace is removed,
/// including whitespace exposed by dropped characters.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            // Spaces are only emitted between kept characters
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }

    out
}

/// Normalize text and split it into tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of tokens in `text` after normalization.
pub fn word_count(text: &str) -> usize {
    tokenize(text).len()
}
