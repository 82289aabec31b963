//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show vocabulary and corpus sizes
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Loaded vocabulary and corpus sizes
#[derive(Debug, Serialize)]
pub struct LoadedCounts {
    pub stop_words: usize,
    pub synonym_terms: usize,
    pub corpus_entries: usize,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    #[serde(flatten)]
    pub config: Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded: Option<LoadedCounts>,
}

/// Build the config response without printing
pub fn build_response(args: &ConfigArgs, services: &Services) -> ConfigResponse {
    let loaded = args.all.then(|| {
        let matcher = services.read_matcher();
        LoadedCounts {
            stop_words: matcher.vocabulary().stop_words.len(),
            synonym_terms: matcher.vocabulary().synonyms.len(),
            corpus_entries: matcher.corpus().len(),
        }
    });

    ConfigResponse {
        config_file: XdgDirs::new().config_file().to_string_lossy().into_owned(),
        config: (*services.config).clone(),
        loaded,
    }
}

fn display_path(path: Option<&std::path::PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string())
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args, services);
    let config = &response.config;

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", colors::file_path(&response.config_file));
            println!("  chunking:");
            println!("    chunk_size: {}", config.chunking.chunk_size);
            println!("    overlap: {}", config.chunking.overlap);
            println!("    strategy: {}", config.chunking.strategy);
            println!("  matching:");
            println!("    threshold: {}", config.matching.threshold);
            println!("    top_k: {}", config.matching.top_k);
            println!(
                "    vocabulary: {}",
                display_path(config.matching.vocabulary.as_ref())
            );
            println!("  corpus:");
            println!("    path: {}", display_path(config.corpus.path.as_ref()));
            println!("    delimiter: {:?}", config.corpus.delimiter);
            if let Some(loaded) = &response.loaded {
                println!("  loaded:");
                println!("    stop_words: {}", loaded.stop_words);
                println!("    synonym_terms: {}", loaded.synonym_terms);
                println!("    corpus_entries: {}", loaded.corpus_entries);
            }
        }
        OutputFormat::Json => {
            crate::cli::output::print_json(&response)?;
        }
    }

    Ok(())
}
