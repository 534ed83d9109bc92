//! Inverse document frequency over a normalized corpus
//!
//! `idf(t) = log10(N / df(t))` where `N` is the number of documents and
//! `df(t)` the number of documents containing `t` at least once.

use crate::errors::{LexRankError, Result};
use crate::types::Corpus;
use rustc_hash::{FxHashMap, FxHashSet};

/// Term -> idf score, one entry per term seen in at least one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    scores: FxHashMap<String, f64>,
}

impl IdfTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute idf scores for every term of `corpus`
    pub fn from_corpus(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(LexRankError::EmptyCorpus);
        }

        let mut doc_freq: FxHashMap<&str, usize> = FxHashMap::default();
        for doc in corpus.values() {
            let distinct: FxHashSet<&str> = doc.terms().collect();
            for term in distinct {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = corpus.len() as f64;
        let scores: FxHashMap<String, f64> = doc_freq
            .into_iter()
            .map(|(term, df)| (term.to_string(), (n_docs / df as f64).log10()))
            .collect();

        tracing::debug!(documents = corpus.len(), terms = scores.len(), "computed idf table");

        Ok(Self { scores })
    }

    /// Insert or replace a score, returning the previous one
    pub fn insert(&mut self, term: impl Into<String>, score: f64) -> Option<f64> {
        self.scores.insert(term.into(), score)
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.scores.get(term).copied()
    }

    /// Score lookup that fails for terms the table has never seen
    pub fn score(&self, term: &str) -> Result<f64> {
        self.get(term).ok_or_else(|| LexRankError::unknown_term(term))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.scores.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(t, &s)| (t.as_str(), s))
    }

    /// Entries sorted by term, for reproducible output
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(t, s)| (t.into(), s)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NormalizedDocument, TermCounts};

    fn doc(sentences: &[&[&str]]) -> NormalizedDocument {
        NormalizedDocument::from_term_counts(
            sentences
                .iter()
                .map(|terms| {
                    let mut counts = TermCounts::default();
                    for t in *terms {
                        *counts.entry(t.to_string()).or_insert(0) += 1;
                    }
                    counts
                })
                .collect(),
        )
    }

    fn cat_dog_corpus() -> Corpus {
        let mut corpus = Corpus::default();
        corpus.insert(1, doc(&[&["cat", "sat"], &["dog", "ran"]]));
        corpus.insert(2, doc(&[&["dog", "sat"]]));
        corpus
    }

    #[test]
    fn test_idf_values() {
        let table = IdfTable::from_corpus(&cat_dog_corpus()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.get("sat"), Some(0.0));
        assert_eq!(table.get("dog"), Some(0.0));
        assert!((table.get("cat").unwrap() - 0.30103).abs() < 1e-5);
        assert!((table.get("ran").unwrap() - 2f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_term_counted_once_per_document() {
        let mut corpus = Corpus::default();
        corpus.insert(1, doc(&[&["cat", "cat"], &["cat"]]));
        corpus.insert(2, doc(&[&["dog"]]));
        corpus.insert(3, doc(&[&["dog"]]));
        corpus.insert(4, doc(&[&["dog"]]));

        let table = IdfTable::from_corpus(&corpus).unwrap();

        assert!((table.get("cat").unwrap() - 4f64.log10()).abs() < 1e-12);
        assert!((table.get("dog").unwrap() - (4.0f64 / 3.0).log10()).abs() < 1e-12);
    }

    #[test]
    fn test_recompute_is_identical() {
        let corpus = cat_dog_corpus();
        let first = IdfTable::from_corpus(&corpus).unwrap();
        let second = IdfTable::from_corpus(&corpus).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_corpus() {
        let err = IdfTable::from_corpus(&Corpus::default()).unwrap_err();
        assert!(matches!(err, LexRankError::EmptyCorpus));
    }

    #[test]
    fn test_unknown_term_lookup() {
        let table: IdfTable = [("cat", 0.5)].into_iter().collect();

        assert!((table.score("cat").unwrap() - 0.5).abs() < 1e-12);
        assert!(matches!(
            table.score("zebra"),
            Err(LexRankError::UnknownTerm { ref term }) if term == "zebra"
        ));
    }

    #[test]
    fn test_sorted_entries() {
        let table: IdfTable = [("b", 1.0), ("a", 2.0), ("c", 0.0)].into_iter().collect();
        let terms: Vec<_> = table.sorted().into_iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["a", "b", "c"]);
    }
}
