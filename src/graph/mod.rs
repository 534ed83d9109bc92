//! Graph construction and representation
//!
//! This module builds the per-document sentence similarity graph and the
//! damped Markov chain that LexRank walks over.

pub mod builder;
pub mod markov;
pub mod matrix;
