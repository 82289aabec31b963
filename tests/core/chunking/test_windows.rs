// Word-window chunking: coverage and determinism

use crate::common::{assert_valid_stats, five_sentence_text};
use lexis::core::chunking::{stats, Chunker};
use lexis::core::types::{Chunk, ChunkStrategy};

fn spans(chunks: &[Chunk]) -> Vec<(usize, usize)> {
    chunks.iter().map(|c| c.word_span().unwrap()).collect()
}

/// Rebuild the word sequence, skipping words already covered
fn reconstruct(chunks: &[Chunk]) -> Vec<String> {
    let mut words = Vec::new();
    let mut covered = 0usize;

    for chunk in chunks {
        let (start, end) = chunk.word_span().unwrap();
        let chunk_words: Vec<&str> = chunk.text.split_whitespace().collect();
        assert_eq!(chunk_words.len(), end - start);

        for word in chunk_words.iter().skip(covered.saturating_sub(start)) {
            words.push(word.to_string());
        }
        covered = covered.max(end);
    }

    words
}

#[test]
fn test_windows_reconstruct_every_word() {
    let text: String = (0..137).map(|i| format!("tok{i} ")).collect();
    let expected: Vec<String> = text.split_whitespace().map(String::from).collect();

    for (size, overlap) in [(1, 0), (5, 0), (5, 4), (10, 3), (50, 10), (137, 1), (500, 50)] {
        let chunker = Chunker::new(size, overlap).unwrap();
        let chunks = chunker.chunk(&text, ChunkStrategy::Words);

        assert_eq!(
            reconstruct(&chunks),
            expected,
            "size {size}, overlap {overlap} dropped or reordered words"
        );

        let spans = spans(&chunks);
        assert_eq!(spans[0].0, 0);
        assert_eq!(spans.last().unwrap().1, expected.len());
        for pair in spans.windows(2) {
            assert!(pair[1].0 > pair[0].0, "window must advance");
            assert!(pair[1].0 <= pair[0].1, "windows must not leave gaps");
        }
    }
}

#[test]
fn test_windows_indices_are_sequential() {
    let chunker = Chunker::new(4, 1).unwrap();
    let chunks = chunker.chunk("a b c d e f g h i j k", ChunkStrategy::Words);

    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.chunk_index, i);
        assert_eq!(chunk.strategy, ChunkStrategy::Words);
        assert!(chunk.word_count <= 4);
    }
}

#[test]
fn test_windows_collapse_whitespace() {
    let chunker = Chunker::new(3, 0).unwrap();
    let chunks = chunker.chunk("  one\ttwo \n\n three   four ", ChunkStrategy::Words);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "one two three");
    assert_eq!(chunks[1].text, "four");
}

#[test]
fn test_windows_empty_input() {
    let chunker = Chunker::new(10, 2).unwrap();
    assert!(chunker.chunk("", ChunkStrategy::Words).is_empty());
    assert!(chunker.chunk(" \n\t ", ChunkStrategy::Words).is_empty());
}

#[test]
fn test_220_words_reproducible_boundaries() {
    let text = five_sentence_text();
    assert_eq!(text.split_whitespace().count(), 220);

    let chunker = Chunker::new(50, 10).unwrap();
    let first = chunker.chunk(&text, ChunkStrategy::Words);
    let second = chunker.chunk(&text, ChunkStrategy::Words);

    assert_eq!(first, second);
    assert_eq!(
        spans(&first),
        vec![
            (0, 50),
            (40, 90),
            (80, 130),
            (120, 170),
            (160, 210),
            (200, 220),
            (210, 220),
        ]
    );

    let summary = stats(&first).unwrap();
    assert_valid_stats(&summary, &first);
    assert_eq!(summary.min_words, 10);
    assert_eq!(summary.max_words, 50);
}

#[test]
fn test_named_strategy_matches_typed() {
    let chunker = Chunker::new(6, 2).unwrap();
    let text = "one two three four five six seven eight nine";

    let named = chunker.chunk_named(text, "WORDS").unwrap();
    assert_eq!(named, chunker.chunk(text, ChunkStrategy::Words));

    let err = chunker.chunk_named(text, "paragraphs").unwrap_err();
    assert!(err.is_bad_request());
    assert!(err.to_string().contains("words"));
    assert!(err.to_string().contains("sentences"));
}
