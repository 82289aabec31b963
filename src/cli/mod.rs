//! CLI adapter for lexis
//!
//! Exposes normalization, chunking and lexical matching on the command
//! line. Depends on `core/`; `core/` never depends on it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// lexis - text chunking and lexical FAQ matching
///
/// Normalize text, split it into overlapping chunks for retrieval
/// pipelines, and answer questions from a question/answer corpus using
/// synonym-aware Jaccard similarity.
#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(version)]
#[command(about = "Text chunking and lexical FAQ matching", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (replaces the XDG and ./lexis.toml lookup)
    #[arg(long, global = true, env = "LEXIS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the normalized form of a text
    Normalize(commands::NormalizeArgs),

    /// Split a file (or stdin) into overlapping chunks
    Chunk(commands::ChunkArgs),

    /// Answer a question from a question/answer corpus
    Ask(commands::AskArgs),

    /// Compare two texts by Jaccard similarity of their tokens
    Similarity(commands::SimilarityArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  lexis completions bash > ~/.local/share/bash-completion/completions/lexis
    ///   zsh:   lexis completions zsh > ~/.zfunc/_lexis
    ///   fish:  lexis completions fish > ~/.config/fish/completions/lexis.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.merge_env();
            config.validate()?;
            config
        }
        None => {
            let xdg = XdgDirs::new();
            xdg.log_paths();
            Config::load_with_xdg(&xdg)?
        }
    };
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config)?);
    if let Some(report) = &services.corpus_report {
        if report.missing {
            output::print_warning("Configured corpus file not found; corpus is empty");
        }
    }

    // Execute command
    match cli.command {
        Commands::Normalize(args) => commands::normalize::execute(args, &services, cli.format),
        Commands::Chunk(args) => commands::chunk::execute(args, &services, cli.format),
        Commands::Ask(args) => commands::ask::execute(args, &services, cli.format),
        Commands::Similarity(args) => commands::similarity::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
