//! lexis - deterministic text segmentation and lexical matching
//!
//! Embedding-free building blocks for retrieval pipelines: text
//! normalization, overlapping chunking and synonym-aware FAQ
//! matching. Everything is exact and reproducible; vector stores,
//! language models and document extractors stay outside.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - normalizer (lowercase, strip noise, tokenize)
//!   - chunking (word windows, sentence groups, stats)
//!   - matcher (corpus, vocabulary, Jaccard scoring)
//!   - similarity, document, ingest
//!   - config, error, types, xdg, services
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use lexis::core::chunking::Chunker;
//! use lexis::core::matcher::{LexicalMatcher, DEFAULT_THRESHOLD};
//! use lexis::ChunkStrategy;
//!
//! let chunker = Chunker::new(50, 10).unwrap();
//! let chunks = chunker.chunk("First sentence. Second sentence.", ChunkStrategy::Sentences);
//! assert_eq!(chunks.len(), 1);
//!
//! let mut matcher = LexicalMatcher::default();
//! matcher.add("Where is the venue located?", "Tech Hub, Downtown.");
//! let result = matcher.match_query("What is the location?", DEFAULT_THRESHOLD);
//! assert!(result.is_match());
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{LexisError, Result};
pub use core::services::Services;
pub use core::types::*;
