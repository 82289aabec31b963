//! Question/answer corpus.
//!
//! Entries are appended in insertion order and never modified; the
//! only removal is [`Corpus::clear`]. Each question is normalized
//! once when it is added.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use serde::Serialize;

use crate::core::error::Result;
use crate::core::normalizer::normalize;

/// Field separator for corpus files
pub const DEFAULT_DELIMITER: char = '|';

/// A stored question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusEntry {
    question: String,
    answer: String,
    normalized_question: String,
}

impl CorpusEntry {
    fn new(question: String, answer: String) -> Self {
        let normalized_question = normalize(&question);
        Self {
            question,
            answer,
            normalized_question,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn normalized_question(&self) -> &str {
        &self.normalized_question
    }
}

/// Outcome of loading a corpus source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Entries added
    pub loaded: usize,

    /// Non-blank lines without the delimiter
    pub skipped: usize,

    /// Source file did not exist
    pub missing: bool,
}

/// Ordered collection of question/answer entries
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from (question, answer) pairs
    pub fn from_pairs<Q, A>(pairs: impl IntoIterator<Item = (Q, A)>) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
    {
        let mut corpus = Self::new();
        for (question, answer) in pairs {
            corpus.add(question, answer);
        }
        corpus
    }

    /// Append an entry, normalizing its question once
    pub fn add(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.entries
            .push(CorpusEntry::new(question.into(), answer.into()));
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorpusEntry> {
        self.entries.iter()
    }

    /// Load `question<delimiter>answer` lines from a file.
    ///
    /// A missing file is not an error: it is logged, flagged in the
    /// report and leaves the corpus unchanged. Other I/O failures
    /// propagate.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>, delimiter: char) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Corpus file not found: {:?}", path);
                return Ok(LoadReport {
                    missing: true,
                    ..LoadReport::default()
                });
            }
            Err(e) => return Err(e.into()),
        };

        let report = self.load_from_reader(BufReader::new(file), delimiter)?;
        tracing::info!(
            "Loaded {} entries from {:?} ({} lines skipped)",
            report.loaded,
            path,
            report.skipped
        );
        Ok(report)
    }

    /// Load `question<delimiter>answer` lines from a reader.
    ///
    /// Lines are trimmed and blank lines ignored. Only the first
    /// delimiter splits, so answers may contain it. Lines without
    /// the delimiter are skipped and counted.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R, delimiter: char) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.split_once(delimiter) {
                Some((question, answer)) => {
                    self.add(question.trim(), answer.trim());
                    report.loaded += 1;
                }
                None => {
                    tracing::debug!("Skipping line {} without '{}'", line_no + 1, delimiter);
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CorpusEntry;
    type IntoIter = std::slice::Iter<'a, CorpusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
