//! Core data types for lexis.
//!
//! This module defines the records produced by chunking and
//! matching. Every result has a fixed shape so callers can rely on
//! which fields are present.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::LexisError;

/// Answer text returned when the corpus holds no entries
pub const NO_DATA_ANSWER: &str = "No FAQs loaded yet. Please add some FAQs first.";

/// Answer text returned when no entry clears the threshold
pub const NO_MATCH_ANSWER: &str =
    "I couldn't find a good answer to that question. Could you rephrase it?";

/// How a document is split into chunks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    /// Fixed-size sliding window over whitespace-separated words
    Words,
    /// Whole sentences grouped up to the size target
    #[default]
    Sentences,
}

impl ChunkStrategy {
    /// Strategy names accepted by [`FromStr`]
    pub const ACCEPTED: [&'static str; 2] = ["words", "sentences"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkStrategy::Words => "words",
            ChunkStrategy::Sentences => "sentences",
        }
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkStrategy {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "words" | "word" => Ok(ChunkStrategy::Words),
            "sentences" | "sentence" => Ok(ChunkStrategy::Sentences),
            other => Err(LexisError::InvalidArgument(format!(
                "Unknown chunking strategy: '{other}'. Use '{}' or '{}'",
                Self::ACCEPTED[0],
                Self::ACCEPTED[1]
            ))),
        }
    }
}

/// Where a chunk sits in its source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChunkBoundary {
    /// Half-open word range `[start_word, end_word)`
    Words { start_word: usize, end_word: usize },

    /// Number of whole sentences in the chunk
    Sentences { sentence_count: usize },
}

/// A single chunk of a larger document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Sequential chunk number, starting at 0
    pub chunk_index: usize,

    /// Chunk text, words joined by single spaces
    pub text: String,

    /// Number of whitespace-separated words in `text`
    pub word_count: usize,

    /// Word range or sentence count, depending on strategy
    pub boundary: ChunkBoundary,

    /// Strategy that produced this chunk
    pub strategy: ChunkStrategy,
}

impl Chunk {
    /// Word range covered by a window chunk
    pub fn word_span(&self) -> Option<(usize, usize)> {
        match self.boundary {
            ChunkBoundary::Words {
                start_word,
                end_word,
            } => Some((start_word, end_word)),
            ChunkBoundary::Sentences { .. } => None,
        }
    }

    /// Sentence count of a sentence chunk
    pub fn sentence_count(&self) -> Option<usize> {
        match self.boundary {
            ChunkBoundary::Sentences { sentence_count } => Some(sentence_count),
            ChunkBoundary::Words { .. } => None,
        }
    }
}

/// Summary statistics over a chunk sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkStats {
    pub count: usize,
    pub avg_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub total_words: usize,
    pub strategy: ChunkStrategy,
}

/// How a match attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// An entry cleared the threshold
    Matched,
    /// Best score stayed below the threshold
    NoConfidentMatch,
    /// Nothing to match against
    EmptyCorpus,
}

/// Result of matching a query against the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning answer, or a fallback message when nothing matched
    pub answer: String,

    /// Jaccard score of the best entry, in [0, 1]
    pub confidence: f64,

    /// Question of the winning entry, absent without a confident match
    pub matched_question: Option<String>,

    pub outcome: MatchOutcome,
}

impl MatchResult {
    pub fn empty_corpus() -> Self {
        Self {
            answer: NO_DATA_ANSWER.to_string(),
            confidence: 0.0,
            matched_question: None,
            outcome: MatchOutcome::EmptyCorpus,
        }
    }

    pub fn no_confident_match(best_score: f64) -> Self {
        Self {
            answer: NO_MATCH_ANSWER.to_string(),
            confidence: best_score,
            matched_question: None,
            outcome: MatchOutcome::NoConfidentMatch,
        }
    }

    pub fn matched(question: &str, answer: &str, score: f64) -> Self {
        Self {
            answer: answer.to_string(),
            confidence: score,
            matched_question: Some(question.to_string()),
            outcome: MatchOutcome::Matched,
        }
    }

    /// True when an entry cleared the threshold
    pub fn is_match(&self) -> bool {
        self.outcome == MatchOutcome::Matched
    }
}

/// A corpus entry with its score for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub question: String,
    pub answer: String,
    pub score: f64,
}
