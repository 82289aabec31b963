//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod ask;
pub mod chunk;
pub mod completions;
pub mod config;
pub mod normalize;
pub mod similarity;

// Re-export argument types for use in mod.rs
pub use ask::AskArgs;
pub use chunk::ChunkArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use normalize::NormalizeArgs;
pub use similarity::SimilarityArgs;
