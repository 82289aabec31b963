//! Similarity command - compare two texts lexically

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::normalizer::{normalize, tokenize};
use crate::core::services::Services;
use crate::core::similarity::{jaccard, SimilarityBand};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Arguments for the similarity command
#[derive(Args, Debug)]
pub struct SimilarityArgs {
    /// First text
    pub first: String,

    /// Second text
    pub second: String,

    /// Drop stop words and expand synonyms before comparing
    #[arg(long, short = 'v')]
    pub vocabulary: bool,
}

/// Similarity response
#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    pub score: f64,
    pub band: SimilarityBand,
    pub shared_terms: Vec<String>,
}

/// Compare the two texts of `args`
pub fn build_response(args: &SimilarityArgs, services: &Services) -> SimilarityResponse {
    let (first, second) = if args.vocabulary {
        let matcher = services.read_matcher();
        let vocabulary = matcher.vocabulary();
        (
            vocabulary.term_set(&normalize(&args.first)),
            vocabulary.term_set(&normalize(&args.second)),
        )
    } else {
        (
            tokenize(&args.first).into_iter().collect::<BTreeSet<_>>(),
            tokenize(&args.second).into_iter().collect::<BTreeSet<_>>(),
        )
    };

    let score = jaccard(&first, &second);
    SimilarityResponse {
        score,
        band: SimilarityBand::from_score(score),
        shared_terms: first.intersection(&second).cloned().collect(),
    }
}

/// Execute the similarity command
pub fn execute(
    args: SimilarityArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args, services);

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                output::format_confidence_colored(response.score),
                colors::dim(&format!("({})", response.band))
            );
            if !response.shared_terms.is_empty() {
                println!(
                    "{} {}",
                    colors::dim("shared:"),
                    response.shared_terms.join(", ")
                );
            }
        }
        OutputFormat::Json => {
            output::print_json(&response)?;
        }
    }

    Ok(())
}
