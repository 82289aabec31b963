//! Lexical question matching.
//!
//! - **corpus**: ordered question/answer entries and file loading
//! - **vocabulary**: stop words and synonym tables
//! - **lexical**: Jaccard scoring over expanded term sets

pub mod corpus;
pub mod lexical;
pub mod vocabulary;

pub use corpus::{Corpus, CorpusEntry, LoadReport, DEFAULT_DELIMITER};
pub use lexical::{LexicalMatcher, DEFAULT_THRESHOLD};
pub use vocabulary::{StopWordSet, SynonymTable, Vocabulary};
