//! Synonym-aware lexical matching.
//!
//! A query and each stored question go through the same pipeline:
//! normalize, drop stop words (falling back to the unfiltered
//! tokens when nothing is left), expand with synonyms. The entry
//! with the highest Jaccard score over those sets wins.
//!
//! # Example
//!
//! ```
//! use lexis::core::matcher::{Corpus, LexicalMatcher, Vocabulary, DEFAULT_THRESHOLD};
//!
//! let mut matcher = LexicalMatcher::new(Corpus::new(), Vocabulary::default());
//! matcher.add("How do I register for the event?", "Visit our website.");
//! matcher.add("Is there a registration fee?", "Free to attend.");
//!
//! let result = matcher.match_query("How can I sign up?", DEFAULT_THRESHOLD);
//! assert_eq!(result.matched_question.as_deref(), Some("How do I register for the event?"));
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::error::Result;
use crate::core::matcher::corpus::{Corpus, CorpusEntry, LoadReport};
use crate::core::matcher::vocabulary::Vocabulary;
use crate::core::normalizer::normalize;
use crate::core::similarity::jaccard;
use crate::core::types::{MatchResult, ScoredEntry};

/// Minimum confidence for a match unless the caller says otherwise
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Matches free-form queries against a question/answer corpus.
///
/// Matching takes `&self` and adding takes `&mut self`, so a
/// matcher shared between threads goes behind a `RwLock`.
#[derive(Debug, Clone)]
pub struct LexicalMatcher {
    corpus: Corpus,
    vocabulary: Vocabulary,
}

impl LexicalMatcher {
    pub fn new(corpus: Corpus, vocabulary: Vocabulary) -> Self {
        Self { corpus, vocabulary }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Append a question/answer pair to the corpus
    pub fn add(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.corpus.add(question, answer);
    }

    /// Drop every corpus entry
    pub fn clear(&mut self) {
        self.corpus.clear();
    }

    /// Append the entries of a delimited corpus file
    pub fn load_corpus(&mut self, path: impl AsRef<Path>, delimiter: char) -> Result<LoadReport> {
        self.corpus.load_from_file(path, delimiter)
    }

    /// Expand `terms` with this matcher's synonym table
    pub fn expand_with_synonyms(&self, terms: &BTreeSet<String>) -> BTreeSet<String> {
        self.vocabulary.expand_with_synonyms(terms)
    }

    /// Find the best answer for `query`.
    ///
    /// Never fails: an empty corpus and a best score below
    /// `threshold` are both reported through the result. Ties keep
    /// the entry added first.
    pub fn match_query(&self, query: &str, threshold: f64) -> MatchResult {
        if self.corpus.is_empty() {
            return MatchResult::empty_corpus();
        }

        let query_set = self.query_terms(query);

        let mut best: Option<(&CorpusEntry, f64)> = None;
        for (entry, score) in self.scores(&query_set) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((entry, score)),
            }
        }

        let Some((entry, score)) = best else {
            return MatchResult::empty_corpus();
        };

        tracing::debug!(
            "Query {:?}: best score {:.3} for {:?} (threshold {})",
            query,
            score,
            entry.question(),
            threshold
        );

        if score < threshold {
            MatchResult::no_confident_match(score)
        } else {
            MatchResult::matched(entry.question(), entry.answer(), score)
        }
    }

    /// Top `k` entries for `query` by score.
    ///
    /// Entries scoring 0.0 are left out. Equal scores keep corpus
    /// order.
    pub fn rank(&self, query: &str, k: usize) -> Vec<ScoredEntry> {
        let query_set = self.query_terms(query);

        let mut scored: Vec<_> = self
            .scores(&query_set)
            .filter(|(_, score)| *score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(k)
            .map(|(entry, score)| ScoredEntry {
                question: entry.question().to_string(),
                answer: entry.answer().to_string(),
                score,
            })
            .collect()
    }

    fn query_terms(&self, query: &str) -> BTreeSet<String> {
        self.vocabulary.term_set(&normalize(query))
    }

    fn scores<'a>(
        &'a self,
        query_set: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = (&'a CorpusEntry, f64)> + 'a {
        self.corpus.iter().map(move |entry| {
            let entry_set = self.vocabulary.term_set(entry.normalized_question());
            (entry, jaccard(query_set, &entry_set))
        })
    }
}

impl Default for LexicalMatcher {
    fn default() -> Self {
        Self::new(Corpus::new(), Vocabulary::default())
    }
}
