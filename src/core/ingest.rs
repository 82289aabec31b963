//! Document ingestion pipeline.
//!
//! Coordinates the hand-off to an external vector store:
//! 1. Chunk the text
//! 2. Attach caller metadata plus per-chunk metadata
//! 3. Assign stable record ids
//! 4. Pass the batch to a [`ChunkSink`]
//!
//! Embedding and storage are the sink's business.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

use crate::core::chunking::Chunker;
use crate::core::document::Document;
use crate::core::error::Result;
use crate::core::types::ChunkStrategy;

/// Flat string metadata attached to each record
pub type Metadata = BTreeMap<String, String>;

/// A chunk ready for an external store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    /// `"{doc_id}-{chunk_index}"`
    pub id: String,
    pub text: String,
    pub metadata: Metadata,
}

/// Destination for chunk records, typically a vector store client
pub trait ChunkSink {
    /// Accept one document's records in chunk order
    fn accept(&mut self, records: Vec<ChunkRecord>) -> Result<()>;
}

impl ChunkSink for Vec<ChunkRecord> {
    fn accept(&mut self, records: Vec<ChunkRecord>) -> Result<()> {
        self.extend(records);
        Ok(())
    }
}

/// Statistics from one ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub chunks_created: usize,

    /// Sum of chunk word counts, overlap counted once per chunk
    pub words_indexed: usize,

    pub duration_ms: u64,
}

/// Chunks documents and forwards them to a sink
#[derive(Debug, Clone)]
pub struct IngestPipeline {
    chunker: Chunker,
    strategy: ChunkStrategy,
}

impl IngestPipeline {
    pub fn new(chunker: Chunker, strategy: ChunkStrategy) -> Self {
        Self { chunker, strategy }
    }

    pub fn strategy(&self) -> ChunkStrategy {
        self.strategy
    }

    /// Chunk `text` and hand the records to `sink`.
    ///
    /// Per-chunk keys (`chunk_index`, `word_count`, `strategy`)
    /// override caller metadata with the same name. Text with no
    /// words produces no records and the sink is not called.
    pub fn ingest_text<S: ChunkSink + ?Sized>(
        &self,
        doc_id: &str,
        text: &str,
        metadata: &Metadata,
        sink: &mut S,
    ) -> Result<IngestStats> {
        let start = Instant::now();
        let chunks = self.chunker.chunk(text, self.strategy);

        if chunks.is_empty() {
            tracing::debug!("Nothing to ingest for {}", doc_id);
            return Ok(IngestStats {
                chunks_created: 0,
                words_indexed: 0,
                duration_ms: start.elapsed().as_millis() as u64,
            });
        }

        let words_indexed = chunks.iter().map(|c| c.word_count).sum();
        let records: Vec<ChunkRecord> = chunks
            .into_iter()
            .map(|chunk| {
                let mut record_metadata = metadata.clone();
                record_metadata.insert("chunk_index".to_string(), chunk.chunk_index.to_string());
                record_metadata.insert("word_count".to_string(), chunk.word_count.to_string());
                record_metadata.insert("strategy".to_string(), chunk.strategy.to_string());

                ChunkRecord {
                    id: format!("{doc_id}-{}", chunk.chunk_index),
                    text: chunk.text,
                    metadata: record_metadata,
                }
            })
            .collect();

        let chunks_created = records.len();
        sink.accept(records)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Ingested {}: {} chunks, {} words in {}ms",
            doc_id,
            chunks_created,
            words_indexed,
            duration_ms
        );

        Ok(IngestStats {
            chunks_created,
            words_indexed,
            duration_ms,
        })
    }

    /// Ingest an extracted document.
    ///
    /// Adds `source`, `source_type`, `num_pages` and `title`
    /// (`"Unknown"` when absent) to each record. The source doubles
    /// as the document id.
    pub fn ingest_document<S: ChunkSink + ?Sized>(
        &self,
        document: &Document,
        sink: &mut S,
    ) -> Result<IngestStats> {
        let mut metadata = Metadata::new();
        metadata.insert("source".to_string(), document.source.clone());
        metadata.insert("source_type".to_string(), "document".to_string());
        metadata.insert("num_pages".to_string(), document.num_pages().to_string());
        metadata.insert(
            "title".to_string(),
            document
                .title
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
        );

        self.ingest_text(&document.source, &document.full_text(), &metadata, sink)
    }
}
