//! Pre-extracted documents.
//!
//! lexis never parses PDF, HTML or other binary formats. An
//! external extractor hands over per-page text plus whatever
//! metadata it found, and this module offers lookups over it.

use serde::{Deserialize, Serialize};

/// Characters of page text shown in a search preview
pub const PREVIEW_CHARS: usize = 200;

/// One extracted page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number
    pub page_number: usize,
    pub text: String,
}

/// A document as produced by an external text extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name or other source identifier
    pub source: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub pages: Vec<Page>,
}

/// A page containing a search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHit {
    pub page_number: usize,
    pub preview: String,
}

impl Document {
    /// Build a document from page texts, numbering pages from 1
    pub fn from_pages<S: Into<String>>(
        source: impl Into<String>,
        pages: impl IntoIterator<Item = S>,
    ) -> Self {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| Page {
                page_number: i + 1,
                text: text.into(),
            })
            .collect();

        Self {
            source: source.into(),
            pages,
            ..Self::default()
        }
    }

    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Page texts joined with newlines
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whitespace-separated words across all pages
    pub fn word_count(&self) -> usize {
        self.pages
            .iter()
            .map(|p| p.text.split_whitespace().count())
            .sum()
    }

    /// Characters in the full text, newlines included
    pub fn char_count(&self) -> usize {
        self.full_text().chars().count()
    }

    /// Pages whose text contains `term`, ignoring case.
    ///
    /// Previews hold the first [`PREVIEW_CHARS`] characters of the
    /// page, cut on a character boundary, followed by `...`.
    pub fn search_pages(&self, term: &str) -> Vec<PageHit> {
        let needle = term.to_lowercase();

        self.pages
            .iter()
            .filter(|page| page.text.to_lowercase().contains(&needle))
            .map(|page| PageHit {
                page_number: page.page_number,
                preview: preview(&page.text),
            })
            .collect()
    }
}

fn preview(text: &str) -> String {
    let end = text
        .char_indices()
        .nth(PREVIEW_CHARS)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(text.len());
    format!("{}...", &text[..end])
}
