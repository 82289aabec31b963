//! Tests for the chunk command

use super::test_helpers::{chunk_args, chunk_args_with};
use crate::common::{create_test_services, five_sentence_text, TestFiles};
use lexis::cli::commands::chunk::{build_response, execute};
use lexis::cli::OutputFormat;
use lexis::core::types::ChunkStrategy;

#[test]
fn test_chunk_uses_config_defaults() {
    let services = create_test_services();
    let text = five_sentence_text();
    let files = TestFiles::with_files(&[("doc.txt", text.as_str())]);

    let response = build_response(&chunk_args(files.files[0].clone()), &text, &services).unwrap();

    assert_eq!(response.strategy, ChunkStrategy::Sentences);
    assert_eq!(response.chunk_size, 500);
    assert_eq!(response.overlap, 50);
    assert_eq!(response.chunks.len(), 1);
    assert_eq!(response.stats.unwrap().total_words, 220);
}

#[test]
fn test_chunk_overrides() {
    let services = create_test_services();
    let text = five_sentence_text();
    let args = chunk_args_with("doc.txt".into(), ChunkStrategy::Words, 50, 10);

    let response = build_response(&args, &text, &services).unwrap();

    assert_eq!(response.strategy, ChunkStrategy::Words);
    assert_eq!(response.chunks.len(), 7);
    assert_eq!(response.chunks[1].word_span(), Some((40, 90)));
    assert_eq!(response.source, "doc.txt");
}

#[test]
fn test_chunk_invalid_overlap_fails() {
    let services = create_test_services();
    let args = chunk_args_with("doc.txt".into(), ChunkStrategy::Words, 10, 10);

    let err = build_response(&args, "a b c", &services).unwrap_err();
    assert!(err.to_string().contains("overlap"));
}

#[test]
fn test_chunk_stats_only() {
    let services = create_test_services();
    let mut args = chunk_args_with("doc.txt".into(), ChunkStrategy::Words, 4, 1);
    args.stats = true;

    let response = build_response(&args, "a b c d e f g h", &services).unwrap();
    assert!(response.chunks.is_empty());
    assert_eq!(response.stats.unwrap().count, 4);
}

#[test]
fn test_chunk_empty_text_has_no_stats() {
    let services = create_test_services();
    let response = build_response(&chunk_args("empty.txt".into()), "   ", &services).unwrap();

    assert!(response.chunks.is_empty());
    assert!(response.stats.is_none());
}

#[test]
fn test_chunk_execute_reads_file() {
    let services = create_test_services();
    let files = TestFiles::with_files(&[("notes.txt", "First point. Second point! Third?")]);

    assert!(execute(chunk_args(files.files[0].clone()), &services, OutputFormat::Human).is_ok());
    assert!(execute(chunk_args(files.files[0].clone()), &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_chunk_execute_missing_file() {
    let services = create_test_services();
    let files = TestFiles::with_files(&[]);

    let err = execute(chunk_args(files.path("nope.txt")), &services, OutputFormat::Human)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
