//! Sparse tf-idf sentence vectors
//!
//! Each sentence becomes a sparse term -> weight map with
//! `weight = (1 + log10(count)) * idf(term)`. Weights that round to zero are
//! not stored, so a sentence made only of corpus-wide terms is an empty
//! vector with zero length.

use super::idf::IdfTable;
use crate::errors::Result;
use crate::types::{NormalizedDocument, TermCounts, UnknownTermPolicy};
use rustc_hash::FxHashMap;

/// A sparse tf-idf vector for one sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfVector {
    /// Non-zero dimensions: term -> weight
    pub weights: FxHashMap<String, f64>,
}

impl TfIdfVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a map of weights, dropping near-zero entries
    pub fn from_weights(mut weights: FxHashMap<String, f64>) -> Self {
        weights.retain(|_, w| !is_zero(*w));
        Self { weights }
    }

    /// Weight a sentence's term counts with `idf`
    pub fn from_term_counts(
        counts: &TermCounts,
        idf: &IdfTable,
        policy: UnknownTermPolicy,
    ) -> Result<Self> {
        let mut weights = FxHashMap::default();

        for (term, &count) in counts {
            let idf_score = match (idf.score(term), policy) {
                (Ok(score), _) => score,
                (Err(_), UnknownTermPolicy::Ignore) => {
                    tracing::warn!(term = term.as_str(), "term missing from idf table, ignoring");
                    continue;
                }
                (Err(e), UnknownTermPolicy::Error) => return Err(e),
            };

            let weight = term_frequency(count) * idf_score;
            if !is_zero(weight) {
                weights.insert(term.clone(), weight);
            }
        }

        Ok(Self { weights })
    }

    /// Euclidean (L2) length
    pub fn euclidean_length(&self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Sum of squared weights
    pub fn squared_length(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }

    /// Dot product over the shared terms
    pub fn dot(&self, other: &TfIdfVector) -> f64 {
        // Iterate over the smaller map
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .weights
            .iter()
            .filter_map(|(term, w)| large.weights.get(term).map(|o| w * o))
            .sum()
    }

    /// Cosine similarity. Zero-length vectors have similarity 0 with
    /// everything, including themselves.
    pub fn cosine_similarity(&self, other: &TfIdfVector) -> f64 {
        // One sqrt of the product: exact at boundaries like 0.5 and 1.0
        let norm_product_sq = self.squared_length() * other.squared_length();
        if norm_product_sq == 0.0 {
            return 0.0;
        }
        self.dot(other) / norm_product_sq.sqrt()
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Log-scaled term frequency: `1 + log10(count)`, or 0 for a zero count
pub fn term_frequency(count: usize) -> f64 {
    if count > 0 {
        1.0 + (count as f64).log10()
    } else {
        0.0
    }
}

fn is_zero(value: f64) -> bool {
    value.abs() <= f64::EPSILON
}

/// Build one tf-idf vector per sentence of `doc`, in order
pub fn tf_idf_maps(
    doc: &NormalizedDocument,
    idf: &IdfTable,
    policy: UnknownTermPolicy,
) -> Result<Vec<TfIdfVector>> {
    doc.sentences()
        .iter()
        .map(|counts| TfIdfVector::from_term_counts(counts, idf, policy))
        .collect()
}

/// Cosine similarity between two sentence vectors
pub fn cosine_sim(v1: &TfIdfVector, v2: &TfIdfVector) -> f64 {
    v1.cosine_similarity(v2)
}
