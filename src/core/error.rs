//! Error types and error handling for lexis.
//!
//! Absence of a match is not an error: it is reported through
//! [`MatchResult`](crate::core::types::MatchResult). The variants
//! here cover misconfiguration, bad caller input and ambient I/O.

use thiserror::Error;

/// Result type alias for lexis operations
pub type Result<T> = std::result::Result<T, LexisError>;

/// Main error type for lexis
#[derive(Error, Debug)]
pub enum LexisError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl LexisError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error came from invalid configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, LexisError::ConfigError(_) | LexisError::TomlError(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            LexisError::ConfigError(_) | LexisError::InvalidArgument(_)
        )
    }
}
