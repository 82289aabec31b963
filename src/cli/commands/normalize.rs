//! Normalize command - show the canonical form of a text

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::normalizer;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the normalize command
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Text to normalize (multiple arguments are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Also list the tokens
    #[arg(long, short = 't')]
    pub tokens: bool,
}

/// Normalize response
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub input: String,
    pub normalized: String,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
}

/// Build the normalize response without printing
pub fn build_response(args: &NormalizeArgs) -> NormalizeResponse {
    let input = args.text.join(" ");
    let normalized = normalizer::normalize(&input);
    let word_count = normalizer::word_count(&input);
    let tokens = args.tokens.then(|| normalizer::tokenize(&input));

    NormalizeResponse {
        input,
        normalized,
        word_count,
        tokens,
    }
}

/// Execute the normalize command
pub fn execute(
    args: NormalizeArgs,
    _services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args);

    match format {
        OutputFormat::Human => {
            println!("{}", response.normalized);
            if let Some(tokens) = &response.tokens {
                println!(
                    "{} {}",
                    colors::dim("tokens:"),
                    colors::number(&tokens.len().to_string())
                );
                for token in tokens {
                    println!("  {token}");
                }
            }
        }
        OutputFormat::Json => {
            crate::cli::output::print_json(&response)?;
        }
    }

    Ok(())
}
