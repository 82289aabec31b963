// UTF-8 safety tests: emoji, multibyte and mixed content
//
// Chunk text keeps the original characters; only matching
// normalizes them away.

use lexis::core::chunking::{split_sentences, Chunker};
use lexis::core::normalizer::normalize;
use lexis::core::types::ChunkStrategy;

#[test]
fn test_emoji_preserved_in_windows() {
    let chunker = Chunker::new(3, 1).unwrap();
    let chunks = chunker.chunk("🚀 launch 🎉 party 🦀 crab", ChunkStrategy::Words);

    assert_eq!(chunks[0].text, "🚀 launch 🎉");
    assert_eq!(chunks[1].text, "🎉 party 🦀");
    assert_eq!(chunks[2].text, "🦀 crab");
}

#[test]
fn test_multibyte_sentences() {
    let text = "Grüße aus München. 東京 は 大きい! Ça va? Très bien.";
    let sentences = split_sentences(text);

    assert_eq!(
        sentences,
        vec!["Grüße aus München.", "東京 は 大きい!", "Ça va?", "Très bien."]
    );

    let chunker = Chunker::new(4, 1).unwrap();
    let chunks = chunker.chunk(text, ChunkStrategy::Sentences);
    assert!(chunks.iter().all(|c| !c.text.is_empty()));
    assert!(chunks[0].text.starts_with("Grüße"));
}

#[test]
fn test_fullwidth_punctuation_is_not_a_break() {
    // Only ASCII terminal marks end a sentence
    let sentences = split_sentences("これはペンです。 それは本です。");
    assert_eq!(sentences.len(), 1);
}

#[test]
fn test_normalize_drops_non_ascii() {
    assert_eq!(normalize("Café 🚀 Rocket"), "caf rocket");
    assert_eq!(normalize("東京 Tokyo"), "tokyo");
    assert_eq!(normalize("🦀🦀🦀"), "");
}

#[test]
fn test_normalize_unicode_whitespace() {
    assert_eq!(normalize("a\u{00A0}b\u{2003}c"), "a b c");
}

#[test]
fn test_normalize_properties_on_mixed_input() {
    let inputs = [
        "",
        "   ",
        "Hello, World!!!",
        "  Leading and trailing  ",
        "Price: $99.99 (AMAZING Deal!!!)",
        "!!! ??? ...",
        "émigré naïve Ñandú",
        "tab\tnew\nline\r\nend",
        "İstanbul",
        "a - b",
    ];

    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        assert!(!once.starts_with(' ') && !once.ends_with(' '));
        assert!(!once.contains("  "));
        assert!(once
            .chars()
            .all(|c| c == ' ' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
