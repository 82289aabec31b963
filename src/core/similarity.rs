//! Similarity measures.
//!
//! [`jaccard`] drives lexical matching. The vector helpers score
//! embeddings produced elsewhere; nothing in lexis computes
//! embeddings itself.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::error::{LexisError, Result};

/// Jaccard similarity `|a ∩ b| / |a ∪ b|`, 0.0 when both are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Returns 0.0 when either vector has zero magnitude.
///
/// # Errors
///
/// Returns [`LexisError::InvalidArgument`] when the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(LexisError::InvalidArgument(format!(
            "Vectors must be same length: got {} and {}",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Coarse reading of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBand {
    Different,
    Related,
    SomewhatSimilar,
    VerySimilar,
    NearlyIdentical,
}

impl SimilarityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            SimilarityBand::NearlyIdentical
        } else if score >= 0.7 {
            SimilarityBand::VerySimilar
        } else if score >= 0.5 {
            SimilarityBand::SomewhatSimilar
        } else if score >= 0.3 {
            SimilarityBand::Related
        } else {
            SimilarityBand::Different
        }
    }
}

impl fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SimilarityBand::NearlyIdentical => "nearly identical",
            SimilarityBand::VerySimilar => "very similar",
            SimilarityBand::SomewhatSimilar => "somewhat similar",
            SimilarityBand::Related => "a bit related",
            SimilarityBand::Different => "quite different",
        };
        f.write_str(label)
    }
}

/// Score named candidates against `base`, most similar first.
///
/// Candidates with equal scores keep their input order.
pub fn rank_by_similarity<'a>(
    base: &[f32],
    candidates: &[(&'a str, &[f32])],
) -> Result<Vec<(&'a str, f64)>> {
    let mut scored = candidates
        .iter()
        .map(|(name, vector)| Ok((*name, cosine_similarity(base, vector)?)))
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(scored)
}
