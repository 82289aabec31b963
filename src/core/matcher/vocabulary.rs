//! Stop words and synonym tables used by the matcher.
//!
//! Synonym entries are independent forward mappings. A table may
//! list `b` under `a` without listing `a` under `b`, and expansion
//! follows a single level only, so chains are not chased.
//!
//! Vocabulary files are TOML:
//!
//! ```toml
//! stop_words = ["a", "the", "how"]
//!
//! [synonyms]
//! sign = ["register", "join"]
//! pay = ["fee", "cost"]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LexisError, Result};
use crate::core::normalizer::normalize;

/// Canonical term -> equivalent terms
pub type SynonymTable = BTreeMap<String, BTreeSet<String>>;

/// Terms excluded from matching signal
pub type StopWordSet = BTreeSet<String>;

const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "am", "be", "to", "of", "in", "on", "at", "for", "with", "do",
    "does", "i", "you", "we", "they", "there", "can", "will", "it", "what", "how", "when",
    "where",
];

const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    ("sign", &["register", "signup", "join", "enroll"]),
    ("register", &["sign", "signup", "join", "enroll"]),
    ("signup", &["sign", "register", "join", "enroll"]),
    ("pay", &["fee", "cost", "price", "money", "charge"]),
    ("fee", &["pay", "cost", "price", "money", "charge"]),
    ("cost", &["pay", "fee", "price", "money", "charge"]),
    ("start", &["schedule", "time", "begin", "when"]),
    ("time", &["schedule", "start", "when"]),
    ("when", &["time", "schedule", "start"]),
    ("where", &["venue", "location", "place"]),
    ("venue", &["where", "location", "place"]),
    ("location", &["where", "venue", "place"]),
];

/// Stop words plus synonym table, injected into the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub stop_words: StopWordSet,

    #[serde(default)]
    pub synonyms: SynonymTable,
}

impl Default for Vocabulary {
    /// Event-FAQ vocabulary: registration, cost, schedule and venue terms
    fn default() -> Self {
        let stop_words = DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect();
        let synonyms = DEFAULT_SYNONYMS
            .iter()
            .map(|(term, equivalents)| {
                (
                    term.to_string(),
                    equivalents.iter().map(|w| w.to_string()).collect(),
                )
            })
            .collect();

        Self {
            stop_words,
            synonyms,
        }
    }
}

impl Vocabulary {
    pub fn new(synonyms: SynonymTable, stop_words: StopWordSet) -> Self {
        Self {
            stop_words,
            synonyms,
        }
    }

    /// Vocabulary with no stop words and no synonyms
    pub fn empty() -> Self {
        Self::new(SynonymTable::new(), StopWordSet::new())
    }

    /// Parse a TOML vocabulary.
    ///
    /// Every term is normalized so it lines up with query tokens;
    /// terms that normalize to nothing are dropped.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: Vocabulary = toml::from_str(contents)?;

        let stop_words = raw.stop_words.iter().filter_map(|w| term(w)).collect();
        let synonyms = raw
            .synonyms
            .iter()
            .filter_map(|(key, equivalents)| {
                let key = term(key)?;
                let equivalents = equivalents.iter().filter_map(|w| term(w)).collect();
                Some((key, equivalents))
            })
            .collect();

        Ok(Self::new(synonyms, stop_words))
    }

    /// Load a TOML vocabulary file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            LexisError::ConfigError(format!("Failed to read vocabulary file {path:?}: {e}"))
        })?;

        let vocabulary = Self::from_toml_str(&contents)?;
        tracing::info!(
            "Loaded vocabulary from {:?}: {} stop words, {} synonym entries",
            path,
            vocabulary.stop_words.len(),
            vocabulary.synonyms.len()
        );
        Ok(vocabulary)
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Union `terms` with the synonyms listed under each term.
    ///
    /// One level deep: synonyms of synonyms are not added.
    pub fn expand_with_synonyms(&self, terms: &BTreeSet<String>) -> BTreeSet<String> {
        let mut expanded = terms.clone();
        for term in terms {
            if let Some(equivalents) = self.synonyms.get(term) {
                expanded.extend(equivalents.iter().cloned());
            }
        }
        expanded
    }

    /// Matching term set for already-normalized text.
    ///
    /// Drops stop words, falling back to the unfiltered tokens when
    /// every token is a stop word, then expands with synonyms.
    pub fn term_set(&self, normalized: &str) -> BTreeSet<String> {
        let tokens: BTreeSet<String> = normalized
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let filtered: BTreeSet<String> = tokens
            .iter()
            .filter(|t| !self.is_stop_word(t))
            .cloned()
            .collect();

        if filtered.is_empty() {
            self.expand_with_synonyms(&tokens)
        } else {
            self.expand_with_synonyms(&filtered)
        }
    }
}

fn term(raw: &str) -> Option<String> {
    let normalized = normalize(raw);
    (!normalized.is_empty()).then_some(normalized)
}
