//! Ask command - answer a question from the FAQ corpus

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{MatchResult, ScoredEntry};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the ask command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Question to answer
    pub query: String,

    /// Corpus file of `question|answer` lines (replaces the configured corpus)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Minimum confidence in [0, 1] (default from config)
    #[arg(long, short = 't')]
    pub threshold: Option<f64>,

    /// Number of ranked candidates to show (default from config)
    #[arg(long, short = 'k')]
    pub top: Option<usize>,
}

/// Ask response
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub query: String,
    pub threshold: f64,
    pub corpus_size: usize,
    pub result: MatchResult,
    pub candidates: Vec<ScoredEntry>,
}

/// Answer `args.query`, loading `args.corpus` first when given
pub fn build_response(
    args: &AskArgs,
    services: &Services,
) -> Result<AskResponse, Box<dyn std::error::Error>> {
    let threshold = args.threshold.unwrap_or(services.config.matching.threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(format!("Threshold must be between 0 and 1, got {threshold}").into());
    }
    let top = args.top.unwrap_or(services.config.matching.top_k);

    if let Some(path) = &args.corpus {
        let mut matcher = services.write_matcher();
        matcher.clear();
        let report = matcher.load_corpus(path, services.config.corpus.delimiter)?;
        if report.missing {
            output::print_warning(&format!("Corpus file not found: {}", path.display()));
        } else if report.skipped > 0 {
            output::print_warning(&format!(
                "Skipped {} line(s) without a '{}' delimiter",
                report.skipped, services.config.corpus.delimiter
            ));
        }
    }

    let matcher = services.read_matcher();
    Ok(AskResponse {
        query: args.query.clone(),
        threshold,
        corpus_size: matcher.corpus().len(),
        result: matcher.match_query(&args.query, threshold),
        candidates: matcher.rank(&args.query, top),
    })
}

/// Execute the ask command
pub fn execute(
    args: AskArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args, services)?;

    match format {
        OutputFormat::Human => {
            let result = &response.result;
            if result.is_match() {
                println!("{}", colors::success(&result.answer));
            } else {
                println!("{}", colors::warning(&result.answer));
            }

            if let Some(question) = &result.matched_question {
                println!(
                    "{} {} {}",
                    colors::dim("matched:"),
                    question,
                    colors::dim(&format!(
                        "(confidence: {})",
                        output::format_confidence(result.confidence)
                    ))
                );
            } else if response.corpus_size > 0 {
                println!(
                    "{} {}",
                    colors::dim("best confidence:"),
                    output::format_confidence_colored(result.confidence)
                );
            }

            if !response.candidates.is_empty() {
                println!();
                output::print_header("Candidates:");
                for (i, entry) in response.candidates.iter().enumerate() {
                    println!(
                        "[{}] {} {}",
                        colors::rank(&(i + 1).to_string()),
                        entry.question,
                        colors::dim(&format!("({})", output::format_confidence(entry.score)))
                    );
                }
            }
        }
        OutputFormat::Json => {
            output::print_json(&response)?;
        }
    }

    Ok(())
}
