//! Word-window and sentence-aware chunking.
//!
//! Sizes are measured in whitespace-separated words of the raw
//! text. Chunk text keeps the original casing and punctuation so
//! it can be handed to a downstream store as-is.
//!
//! # Example
//!
//! ```
//! use lexis::core::chunking::Chunker;
//! use lexis::core::types::ChunkStrategy;
//!
//! let chunker = Chunker::new(5, 2).unwrap();
//! let chunks = chunker.chunk("a b c d e f g h", ChunkStrategy::Words);
//!
//! assert_eq!(chunks[0].text, "a b c d e");
//! assert_eq!(chunks[1].text, "d e f g h");
//! ```

use crate::core::chunking::sentence::split_sentences;
use crate::core::error::{LexisError, Result};
use crate::core::types::{Chunk, ChunkBoundary, ChunkStrategy};

/// Trailing sentences carried from one sentence chunk into the next
pub const SENTENCE_OVERLAP: usize = 2;

/// Splits text into overlapping, size-bounded chunks.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Target number of words per chunk
    chunk_size: usize,

    /// Words shared between consecutive window chunks
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::ConfigError`] if `chunk_size` is 0 or
    /// if `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(LexisError::ConfigError(
                "chunk_size must be > 0".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(LexisError::ConfigError(format!(
                "overlap ({overlap}) must be < chunk_size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in words.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap in words.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Chunk text with the given strategy.
    pub fn chunk(&self, text: &str, strategy: ChunkStrategy) -> Vec<Chunk> {
        match strategy {
            ChunkStrategy::Words => self.chunk_by_words(text),
            ChunkStrategy::Sentences => self.chunk_by_sentences(text),
        }
    }

    /// Chunk text using a strategy given by name.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::InvalidArgument`] naming the accepted
    /// values when `strategy` is not recognized.
    pub fn chunk_named(&self, text: &str, strategy: &str) -> Result<Vec<Chunk>> {
        let strategy: ChunkStrategy = strategy.parse()?;
        Ok(self.chunk(text, strategy))
    }

    /// Sliding word window.
    ///
    /// Each chunk covers `[start, start + chunk_size)` and the next
    /// one starts `overlap` words before the previous end. The
    /// window stops once the cursor passes the last word or stops
    /// moving forward, so the final chunk may be shorter than
    /// `chunk_size` and may sit inside the overlap of the one
    /// before it.
    pub fn chunk_by_words(&self, text: &str) -> Vec<Chunk> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < words.len() {
            let end = (start + self.chunk_size).min(words.len());

            chunks.push(Chunk {
                chunk_index: chunks.len(),
                text: words[start..end].join(" "),
                word_count: end - start,
                boundary: ChunkBoundary::Words {
                    start_word: start,
                    end_word: end,
                },
                strategy: ChunkStrategy::Words,
            });

            let next = end.saturating_sub(self.overlap);
            if next <= start {
                break;
            }
            start = next;
        }

        tracing::debug!(
            "Word chunking: {} words -> {} chunks (size {}, overlap {})",
            words.len(),
            chunks.len(),
            self.chunk_size,
            self.overlap
        );

        chunks
    }

    /// Group whole sentences up to `chunk_size` words.
    ///
    /// Sentences are never split. When the next sentence would
    /// push a non-empty chunk past `chunk_size`, the chunk is
    /// closed and its last [`SENTENCE_OVERLAP`] sentences seed the
    /// next one. The incoming sentence is appended to the seed
    /// whatever its size, so chunks after the first may exceed
    /// `chunk_size`.
    pub fn chunk_by_sentences(&self, text: &str) -> Vec<Chunk> {
        let sentences = split_sentences(text);
        let mut chunks = Vec::new();
        let mut current: Vec<(&str, usize)> = Vec::new();
        let mut current_words = 0;

        for sentence in &sentences {
            let sentence_words = count_words(sentence);

            if current_words + sentence_words > self.chunk_size && !current.is_empty() {
                chunks.push(sentence_chunk(chunks.len(), &current, current_words));

                let keep = current.len().min(SENTENCE_OVERLAP);
                current.drain(..current.len() - keep);
                current_words = current.iter().map(|(_, n)| n).sum();
            }

            current.push((sentence.as_str(), sentence_words));
            current_words += sentence_words;
        }

        if !current.is_empty() {
            chunks.push(sentence_chunk(chunks.len(), &current, current_words));
        }

        tracing::debug!(
            "Sentence chunking: {} sentences -> {} chunks (target {} words)",
            sentences.len(),
            chunks.len(),
            self.chunk_size
        );

        chunks
    }
}

fn sentence_chunk(chunk_index: usize, sentences: &[(&str, usize)], word_count: usize) -> Chunk {
    let text = sentences
        .iter()
        .map(|(s, _)| *s)
        .collect::<Vec<_>>()
        .join(" ");

    Chunk {
        chunk_index,
        text,
        word_count,
        boundary: ChunkBoundary::Sentences {
            sentence_count: sentences.len(),
        },
        strategy: ChunkStrategy::Sentences,
    }
}

/// Whitespace-separated words in raw text
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
