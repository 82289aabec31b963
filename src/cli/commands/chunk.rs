//! Chunk command - split a file or stdin into overlapping chunks

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::chunking::{self, Chunker};
use crate::core::services::Services;
use crate::core::types::{Chunk, ChunkStats, ChunkStrategy};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Characters of chunk text shown per chunk in human output
const DISPLAY_CHARS: usize = 120;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// File to chunk (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Chunking strategy: words or sentences (default from config)
    #[arg(long, short = 's')]
    pub strategy: Option<ChunkStrategy>,

    /// Words per chunk (default from config)
    #[arg(long, short = 'c')]
    pub chunk_size: Option<usize>,

    /// Words shared between window chunks (default from config)
    #[arg(long, short = 'o')]
    pub overlap: Option<usize>,

    /// Print only summary statistics
    #[arg(long)]
    pub stats: bool,
}

/// Chunk response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub source: String,
    pub strategy: ChunkStrategy,
    pub chunk_size: usize,
    pub overlap: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ChunkStats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<Chunk>,
}

/// Chunk `text` with config defaults overridden by `args`
pub fn build_response(
    args: &ChunkArgs,
    text: &str,
    services: &Services,
) -> Result<ChunkResponse, Box<dyn std::error::Error>> {
    let config = &services.config.chunking;
    let strategy = args.strategy.unwrap_or(config.strategy);

    let chunker = if args.chunk_size.is_some() || args.overlap.is_some() {
        Chunker::new(
            args.chunk_size.unwrap_or(config.chunk_size),
            args.overlap.unwrap_or(config.overlap),
        )?
    } else {
        (*services.chunker).clone()
    };

    let chunks = chunker.chunk(text, strategy);

    // Stats are undefined for zero chunks
    let stats = if chunks.is_empty() {
        None
    } else {
        Some(chunking::stats(&chunks)?)
    };

    let source = args
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    Ok(ChunkResponse {
        source,
        strategy,
        chunk_size: chunker.chunk_size(),
        overlap: chunker.overlap(),
        stats,
        chunks: if args.stats { Vec::new() } else { chunks },
    })
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {e}", path.display()).into()),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Execute the chunk command
pub fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.file.as_ref())?;
    let response = build_response(&args, &text, services)?;

    match format {
        OutputFormat::Human => {
            let Some(stats) = &response.stats else {
                println!("No chunks produced from {}", colors::file_path(&response.source));
                return Ok(());
            };

            output::print_header(&format!(
                "{} chunk(s) from {} ({}, size {}, overlap {})",
                stats.count, response.source, response.strategy, response.chunk_size, response.overlap
            ));

            for chunk in &response.chunks {
                let span = match (chunk.word_span(), chunk.sentence_count()) {
                    (Some((start, end)), _) => format!("words {start}..{end}"),
                    (None, Some(n)) => format!("{n} sentence(s)"),
                    (None, None) => String::new(),
                };
                println!(
                    "[{}] {} {}",
                    colors::rank(&chunk.chunk_index.to_string()),
                    colors::number(&format!("{} words", chunk.word_count)),
                    colors::dim(&span)
                );
                println!("    {}", output::truncate_chars(&chunk.text, DISPLAY_CHARS));
            }

            if !response.chunks.is_empty() {
                println!();
            }
            println!(
                "avg {:.1} words, min {}, max {}, total {}",
                stats.avg_words, stats.min_words, stats.max_words, stats.total_words
            );
        }
        OutputFormat::Json => {
            output::print_json(&response)?;
        }
    }

    Ok(())
}
