//! Core types for rapid_lexrank
//!
//! This module defines the document representations shared by every stage
//! (raw sentences, normalized term counts, corpora) and the run configuration.

use crate::errors::{LexRankError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Documents
// ============================================================================

/// Numeric document identifier derived from a file name
pub type DocId = u64;

/// Term -> occurrence count for a single sentence. Counts are always >= 1.
pub type TermCounts = FxHashMap<String, usize>;

/// A document as read from disk: ordered, unprocessed sentences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub sentences: Vec<String>,
}

impl RawDocument {
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// Build a document from anything yielding sentence strings
    pub fn from_sentences<I, S>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sentences: sentences.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A tokenized and normalized document.
///
/// Sentences that normalize to zero terms are dropped, so positions here do
/// not line up with the [`RawDocument`] they came from. `source_indices[i]`
/// records the raw sentence index of normalized sentence `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedDocument {
    sentences: Vec<TermCounts>,
    source_indices: Vec<usize>,
}

impl NormalizedDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document whose sentences map one-to-one onto raw indices `0..n`
    pub fn from_term_counts(sentences: Vec<TermCounts>) -> Self {
        let source_indices = (0..sentences.len()).collect();
        Self {
            sentences,
            source_indices,
        }
    }

    /// Append a sentence that originated at `source_index` in the raw document
    pub fn push(&mut self, terms: TermCounts, source_index: usize) {
        self.sentences.push(terms);
        self.source_indices.push(source_index);
    }

    /// Term counts of every surviving sentence, in order
    pub fn sentences(&self) -> &[TermCounts] {
        &self.sentences
    }

    /// Raw sentence index for each surviving sentence
    pub fn source_indices(&self) -> &[usize] {
        &self.source_indices
    }

    /// Raw sentence index of normalized sentence `idx`
    pub fn source_index(&self, idx: usize) -> Option<usize> {
        self.source_indices.get(idx).copied()
    }

    /// Iterate over the terms of every sentence; a term shared by several
    /// sentences is yielded once per sentence
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.sentences
            .iter()
            .flat_map(|s| s.keys().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Raw documents keyed by id
pub type RawCorpus = FxHashMap<DocId, RawDocument>;

/// Normalized documents keyed by id
pub type Corpus = FxHashMap<DocId, NormalizedDocument>;

// ============================================================================
// Configuration
// ============================================================================

/// Handling of terms that are absent from the idf table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTermPolicy {
    /// Fail the whole computation with `LexRankError::UnknownTerm`
    #[default]
    Error,
    /// Give the term zero weight
    Ignore,
}

/// Configuration for a LexRank run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexRankConfig {
    /// Minimum cosine similarity for an edge between two sentences
    pub edge_threshold: f64,
    /// Teleportation probability mixed into the transition matrix
    pub damping: f64,
    /// Power iteration stops once no entry moves by more than this
    pub convergence_threshold: f64,
    /// Hard cap on power iteration steps
    pub max_iterations: usize,
    /// Number of sentences in a summary
    pub summary_length: usize,
    /// Language code for the built-in stopword list (e.g., "en")
    pub language: String,
    /// Stopword list file (whitespace separated); replaces the built-in
    /// list for `language` when set
    pub stopwords_file: Option<PathBuf>,
    /// Additional stopwords (extends the built-in or file list)
    pub stopwords: Vec<String>,
    /// What to do with terms missing from the idf table
    pub unknown_terms: UnknownTermPolicy,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            edge_threshold: 0.1,
            damping: 0.15,
            convergence_threshold: 1e-5,
            max_iterations: 10_000,
            summary_length: 3,
            language: "en".to_string(),
            stopwords_file: None,
            stopwords: Vec::new(),
            unknown_terms: UnknownTermPolicy::Error,
        }
    }
}

impl LexRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config; omitted fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LexRankError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(LexRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if !(0.0..=1.0).contains(&self.edge_threshold) {
            return Err(LexRankError::invalid_config(format!(
                "edge_threshold must be between 0 and 1, got {}",
                self.edge_threshold
            )));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(LexRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.max_iterations == 0 {
            return Err(LexRankError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set the edge threshold
    pub fn with_edge_threshold(mut self, threshold: f64) -> Self {
        self.edge_threshold = threshold;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set summary length
    pub fn with_summary_length(mut self, summary_length: usize) -> Self {
        self.summary_length = summary_length;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: read stopwords from a file instead of the built-in list
    pub fn with_stopwords_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords_file = Some(path.into());
        self
    }

    /// Builder method: set the unknown term policy
    pub fn with_unknown_terms(mut self, policy: UnknownTermPolicy) -> Self {
        self.unknown_terms = policy;
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}
