//! # rapid_lexrank
//!
//! LexRank extractive summarization.
//!
//! Sentences are normalized into terms, weighted with tf-idf against a
//! corpus-wide idf table, connected into a similarity graph, and ranked by
//! the stationary distribution of a damped random walk over that graph.
//!
//! ## Workflow
//!
//! 1. Normalize a corpus with [`Normalizer`] and compute an [`IdfTable`].
//!    Persist it with [`io::idf_file::save_idf`].
//! 2. Later, load the table, normalize a single document, and score it with
//!    [`LexRank`]. [`Summary`] maps scores back onto the raw sentences.
//!
//! ```
//! use rapid_lexrank::{IdfTable, LexRank, Normalizer, RawDocument, StopwordFilter};
//! use rapid_lexrank::types::RawCorpus;
//!
//! let normalizer = Normalizer::new(StopwordFilter::from_list(&["the", "a"]));
//!
//! let mut raw = RawCorpus::default();
//! raw.insert(1, RawDocument::from_sentences(["the cat sat", "a dog ran"]));
//! raw.insert(2, RawDocument::from_sentences(["the dog sat"]));
//!
//! let corpus = normalizer.normalize_corpus(&raw);
//! let idf = IdfTable::from_corpus(&corpus).unwrap();
//!
//! let summary = LexRank::default().summarize(&raw[&1], &corpus[&1], &idf).unwrap();
//! assert_eq!(summary.len(), 2);
//! ```

pub mod errors;
pub mod graph;
pub mod io;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;
pub mod vsm;

// Re-export commonly used types
pub use errors::{LexRankError, Result};
pub use types::{
    Corpus, DocId, LexRankConfig, NormalizedDocument, RawCorpus, RawDocument, TermCounts,
    UnknownTermPolicy,
};

// Re-export main functionality
pub use graph::{builder::AdjacencyMatrix, builder::GraphBuilder, matrix::Matrix};
pub use nlp::{normalizer::Normalizer, stopwords::StopwordFilter};
pub use pagerank::{power::PowerIteration, PowerIterationResult};
pub use summarizer::{
    lexrank::{lexrank, LexRank},
    selector::{ScoredSentence, Summary},
};
pub use vsm::{idf::IdfTable, tfidf::TfIdfVector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
