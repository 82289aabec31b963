//! Chunk sequence statistics.

use crate::core::error::{LexisError, Result};
use crate::core::types::{Chunk, ChunkStats};

/// Summarize word counts over a chunk sequence.
///
/// The strategy is taken from the first chunk.
///
/// # Errors
///
/// Returns [`LexisError::InvalidArgument`] for an empty slice,
/// which has no meaningful average.
pub fn stats(chunks: &[Chunk]) -> Result<ChunkStats> {
    let first = chunks
        .first()
        .ok_or_else(|| LexisError::InvalidArgument("No chunks provided".to_string()))?;

    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut total_words = 0;
    for chunk in chunks {
        min_words = min_words.min(chunk.word_count);
        max_words = max_words.max(chunk.word_count);
        total_words += chunk.word_count;
    }

    Ok(ChunkStats {
        count: chunks.len(),
        avg_words: total_words as f64 / chunks.len() as f64,
        min_words,
        max_words,
        total_words,
        strategy: first.strategy,
    })
}
