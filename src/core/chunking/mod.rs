//! Document chunking module.
//!
//! Splits long documents into overlapping chunks for downstream
//! retrieval. Two strategies are available:
//!
//! - word windows: fixed-size sliding window with word overlap
//! - sentences: whole sentences grouped up to a size target, with
//!   the last two sentences repeated at the start of the next chunk
//!
//! Chunking works on raw text so sentence detection can see the
//! original punctuation.

pub mod chunker;
pub mod sentence;
pub mod stats;

pub use chunker::{Chunker, SENTENCE_OVERLAP};
pub use sentence::split_sentences;
pub use stats::stats;
