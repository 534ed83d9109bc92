//! Stationary distributions by power iteration
//!
//! This module provides the solver that turns a transition matrix into
//! LexRank scores.

pub mod power;

use std::cmp::Ordering;

/// Result of a power iteration run
#[derive(Debug, Clone, PartialEq)]
pub struct PowerIterationResult {
    /// Stationary probability of each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-entry change in the final iteration
    pub delta: f64,
}

impl PowerIterationResult {
    /// Create a new result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            scores,
            iterations,
            delta,
        }
    }

    /// Get top N nodes by score.
    ///
    /// Higher scores first; equal scores keep ascending node order.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut ranked = rank_by_score(&self.scores);
        ranked.truncate(n);
        ranked.into_iter().map(|i| (i, self.scores[i])).collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Sum of all scores (1.0 for a probability vector)
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Node indices sorted by descending score, ties broken by ascending index
pub fn rank_by_score(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| compare_ranked(scores, a, b));
    indices
}

fn compare_ranked(scores: &[f64], a: usize, b: usize) -> Ordering {
    scores[b].total_cmp(&scores[a]).then(a.cmp(&b))
}
