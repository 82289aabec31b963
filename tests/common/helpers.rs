// Test helper functions

use lexis::core::config::Config;
use lexis::core::services::Services;
use lexis::core::types::{Chunk, ChunkStats};
use std::path::Path;
use std::sync::Arc;

/// Create test services from default configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()).expect("Default config must be valid"))
}

/// Create test services loading `corpus` at startup
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services_with_corpus(corpus: &Path) -> Arc<Services> {
    let mut config = Config::default();
    config.corpus.path = Some(corpus.to_path_buf());
    Arc::new(Services::new(config).expect("Failed to create services"))
}

/// Assert that chunk stats agree with the chunks they describe
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_stats(stats: &ChunkStats, chunks: &[Chunk]) {
    assert_eq!(stats.count, chunks.len());
    assert_eq!(
        stats.total_words,
        chunks.iter().map(|c| c.word_count).sum::<usize>(),
        "total_words must equal the sum of chunk word counts"
    );
    assert!(
        stats.min_words as f64 <= stats.avg_words,
        "Expected min_words ({}) <= avg_words ({})",
        stats.min_words,
        stats.avg_words
    );
    assert!(
        stats.avg_words <= stats.max_words as f64,
        "Expected avg_words ({}) <= max_words ({})",
        stats.avg_words,
        stats.max_words
    );
}
