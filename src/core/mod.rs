//! Core domain logic (adapter-agnostic)
//!
//! This module contains all text processing that is independent
//! of how it is driven (CLI, embedding application, tests).
//!
//! # Architecture
//!
//! - **normalizer**: Canonical lowercase token stream
//! - **chunking**: Word-window and sentence-aware chunking
//! - **matcher**: Corpus, vocabulary and lexical matching
//! - **similarity**: Jaccard and cosine measures
//! - **document**: Pre-extracted documents and page search
//! - **ingest**: Chunk hand-off to an external store
//! - **config**, **error**, **types**, **xdg**: Ambient plumbing
//! - **services**: Unified service container

pub mod chunking;
pub mod config;
pub mod document;
pub mod error;
pub mod ingest;
pub mod matcher;
pub mod normalizer;
pub mod services;
pub mod similarity;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{LexisError, Result};
pub use services::Services;
