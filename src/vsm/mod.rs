//! Vector space model
//!
//! Corpus-wide idf statistics and per-sentence tf-idf vectors.

pub mod idf;
pub mod tfidf;
