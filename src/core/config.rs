//! Configuration management for lexis.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{LexisError, Result};
use crate::core::matcher::{DEFAULT_DELIMITER, DEFAULT_THRESHOLD};
use crate::core::types::ChunkStrategy;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Target words per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Words shared between consecutive window chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Default strategy ("words" or "sentences")
    #[serde(default)]
    pub strategy: ChunkStrategy,
}

/// Matching configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    /// Minimum confidence for a match
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Number of ranked entries to show
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// TOML vocabulary file; built-in tables when unset
    #[serde(default)]
    pub vocabulary: Option<PathBuf>,
}

/// Corpus source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Delimited question/answer file loaded at startup
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Field separator
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

// Default value functions
fn default_chunk_size() -> usize {
    500
}

fn default_overlap() -> usize {
    50
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_top_k() -> usize {
    3
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            strategy: ChunkStrategy::default(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            top_k: default_top_k(),
            vocabulary: None,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LexisError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. LEXIS_CONFIG env var
    /// 2. XDG config file (~/.config/lexis/config.toml)
    /// 3. ./lexis.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("LEXIS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("lexis.toml").exists() {
                Self::from_file("lexis.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Values that fail to parse are ignored.
    pub fn merge_env(&mut self) {
        // Chunking configuration
        if let Ok(chunk_size) = env::var("LEXIS_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.chunking.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("LEXIS_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.chunking.overlap = o;
            }
        }
        if let Ok(strategy) = env::var("LEXIS_CHUNK_STRATEGY") {
            match strategy.parse() {
                Ok(s) => self.chunking.strategy = s,
                Err(e) => tracing::warn!("Ignoring LEXIS_CHUNK_STRATEGY: {}", e),
            }
        }

        // Matching configuration
        if let Ok(threshold) = env::var("LEXIS_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.matching.threshold = t;
            }
        }
        if let Ok(top_k) = env::var("LEXIS_TOP_K") {
            if let Ok(k) = top_k.parse() {
                self.matching.top_k = k;
            }
        }
        if let Ok(vocabulary) = env::var("LEXIS_VOCABULARY") {
            self.matching.vocabulary = Some(PathBuf::from(vocabulary));
        }

        // Corpus configuration
        if let Ok(corpus) = env::var("LEXIS_CORPUS") {
            self.corpus.path = Some(PathBuf::from(corpus));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(LexisError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.chunking.overlap >= self.chunking.chunk_size {
            return Err(LexisError::ConfigError(
                "Overlap must be less than chunk size".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.matching.threshold) {
            return Err(LexisError::ConfigError(
                "Threshold must be between 0 and 1".to_string(),
            ));
        }

        if self.matching.top_k == 0 {
            return Err(LexisError::ConfigError(
                "Top k must be non-zero".to_string(),
            ));
        }

        if self.corpus.delimiter.is_whitespace() && self.corpus.delimiter != '\t' {
            return Err(LexisError::ConfigError(
                "Corpus delimiter must be a visible character or tab".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} words", self.chunking.chunk_size);
        tracing::info!("  Overlap: {} words", self.chunking.overlap);
        tracing::info!("  Strategy: {}", self.chunking.strategy);
        tracing::info!("  Threshold: {}", self.matching.threshold);
        tracing::info!("  Top k: {}", self.matching.top_k);
        tracing::info!("  Vocabulary: {:?}", self.matching.vocabulary);
        tracing::info!("  Corpus: {:?}", self.corpus.path);
        tracing::info!("  Delimiter: {:?}", self.corpus.delimiter);
    }
}
