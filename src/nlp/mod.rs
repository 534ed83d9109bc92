//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering, and the
//! normalizer that turns sentences into term counts.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;
