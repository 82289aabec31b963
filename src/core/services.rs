//! Unified service container.
//!
//! Holds the components built from one validated [`Config`] so
//! adapters (the CLI, or an embedding application) share a single
//! chunker and matcher.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::chunking::Chunker;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::ingest::IngestPipeline;
use crate::core::matcher::{Corpus, LexicalMatcher, LoadReport, Vocabulary};

/// Shared services built from configuration
#[derive(Clone)]
pub struct Services {
    pub config: Arc<Config>,
    pub chunker: Arc<Chunker>,

    /// Matching runs under the read lock, corpus changes under the
    /// write lock
    pub matcher: Arc<RwLock<LexicalMatcher>>,

    /// Result of loading the configured corpus file, if any
    pub corpus_report: Option<LoadReport>,
}

impl Services {
    /// Build services from configuration.
    ///
    /// Loads the configured vocabulary (built-in tables when unset)
    /// and corpus file. A missing corpus file leaves the corpus
    /// empty.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let chunker = Chunker::new(config.chunking.chunk_size, config.chunking.overlap)?;

        let vocabulary = match &config.matching.vocabulary {
            Some(path) => Vocabulary::from_file(path)?,
            None => Vocabulary::default(),
        };

        let mut corpus = Corpus::new();
        let corpus_report = match &config.corpus.path {
            Some(path) => Some(corpus.load_from_file(path, config.corpus.delimiter)?),
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            chunker: Arc::new(chunker),
            matcher: Arc::new(RwLock::new(LexicalMatcher::new(corpus, vocabulary))),
            corpus_report,
        })
    }

    /// Ingestion pipeline using the configured chunker and strategy
    pub fn pipeline(&self) -> IngestPipeline {
        IngestPipeline::new((*self.chunker).clone(), self.config.chunking.strategy)
    }

    /// Read access to the matcher, recovering a poisoned lock
    pub fn read_matcher(&self) -> RwLockReadGuard<'_, LexicalMatcher> {
        self.matcher.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the matcher
    pub fn write_matcher(&self) -> RwLockWriteGuard<'_, LexicalMatcher> {
        self.matcher.write().unwrap_or_else(PoisonError::into_inner)
    }
}
