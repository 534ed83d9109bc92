//! Summarization components
//!
//! Provides LexRank sentence scoring and the ranking step that turns scores
//! into an extractive summary.

pub mod lexrank;
pub mod selector;
