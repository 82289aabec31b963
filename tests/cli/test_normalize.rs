//! Tests for the normalize command

use crate::common::create_test_services;
use lexis::cli::commands::normalize::{build_response, execute};
use lexis::cli::commands::NormalizeArgs;
use lexis::cli::OutputFormat;

fn args(text: &[&str], tokens: bool) -> NormalizeArgs {
    NormalizeArgs {
        text: text.iter().map(|s| s.to_string()).collect(),
        tokens,
    }
}

#[test]
fn test_normalize_joins_arguments() {
    let response = build_response(&args(&["Hello,", "World!!!"], false));

    assert_eq!(response.input, "Hello, World!!!");
    assert_eq!(response.normalized, "hello world");
    assert_eq!(response.word_count, 2);
    assert!(response.tokens.is_none());
}

#[test]
fn test_normalize_lists_tokens() {
    let response = build_response(&args(&["Price: $99.99 (AMAZING Deal!!!)"], true));
    assert_eq!(
        response.tokens.unwrap(),
        vec!["price", "9999", "amazing", "deal"]
    );
}

#[test]
fn test_normalize_execute_both_formats() {
    let services = create_test_services();

    assert!(execute(args(&["Some text"], true), &services, OutputFormat::Human).is_ok());
    assert!(execute(args(&["Some text"], false), &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_normalize_json_shape() {
    let response = build_response(&args(&["A b"], false));
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["normalized"], "a b");
    assert!(json.get("tokens").is_none());
}
