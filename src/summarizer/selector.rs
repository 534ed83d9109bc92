//! Ranked sentence selection for extractive summaries
//!
//! Maps normalized-sentence scores back onto the raw document through the
//! source indices carried by [`NormalizedDocument`], then orders sentences
//! by descending score with ascending raw index as tie-break.

use crate::errors::{LexRankError, Result};
use crate::types::{NormalizedDocument, RawDocument};

/// A raw sentence with its LexRank score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Index of the sentence in the raw document
    pub index: usize,
    /// Original sentence text
    pub text: String,
    /// LexRank score
    pub score: f64,
}

/// Scored sentences of one document, in raw document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub sentences: Vec<ScoredSentence>,
}

impl Summary {
    /// Pair `scores` (normalized-sentence order) with the raw sentences
    /// they came from
    pub fn from_scores(raw: &RawDocument, doc: &NormalizedDocument, scores: &[f64]) -> Result<Self> {
        if scores.len() != doc.len() {
            return Err(LexRankError::DimensionMismatch {
                expected: doc.len(),
                found: scores.len(),
            });
        }

        let sentences = doc
            .source_indices()
            .iter()
            .zip(scores)
            .map(|(&index, &score)| {
                let text = raw.sentences.get(index).cloned().ok_or(
                    LexRankError::DimensionMismatch {
                        expected: raw.len(),
                        found: index + 1,
                    },
                )?;
                Ok(ScoredSentence { index, text, score })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { sentences })
    }

    /// Sentences ordered by descending score, ties by ascending raw index
    pub fn ranked(&self) -> Vec<&ScoredSentence> {
        let mut ranked: Vec<&ScoredSentence> = self.sentences.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        ranked
    }

    /// The `k` best sentences, best first
    pub fn top(&self, k: usize) -> Vec<&ScoredSentence> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }

    /// The `k` best sentences in raw document order
    pub fn top_in_document_order(&self, k: usize) -> Vec<&ScoredSentence> {
        let mut top = self.top(k);
        top.sort_by_key(|s| s.index);
        top
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
