//! Sentence similarity graph
//!
//! Two sentences are connected when the cosine similarity of their tf-idf
//! vectors reaches the edge threshold. Every sentence is connected to
//! itself, so no node is ever isolated.

use super::matrix::Matrix;
use crate::vsm::tfidf::TfIdfVector;
use rayon::prelude::*;

/// Sentence count above which pairwise similarities are computed in parallel
const PARALLEL_THRESHOLD: usize = 64;

/// Symmetric 0/1 adjacency matrix over one document's sentences
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    matrix: Matrix<bool>,
}

impl AdjacencyMatrix {
    /// `n` sentences with only their self-loops
    pub fn identity(n: usize) -> Self {
        let mut matrix = Matrix::square(n);
        for i in 0..n {
            matrix[(i, i)] = true;
        }
        Self { matrix }
    }

    /// Add the undirected edge `i -- j`
    pub fn connect(&mut self, i: usize, j: usize) {
        self.matrix[(i, j)] = true;
        self.matrix[(j, i)] = true;
    }

    pub fn num_nodes(&self) -> usize {
        self.matrix.rows()
    }

    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.matrix[(i, j)]
    }

    /// Number of 1-entries in column `j`, self-loop included
    pub fn degree(&self, j: usize) -> usize {
        (0..self.num_nodes()).filter(|&i| self.matrix[(i, j)]).count()
    }

    /// Number of undirected edges between distinct sentences
    pub fn num_edges(&self) -> usize {
        let n = self.num_nodes();
        (0..n)
            .map(|i| (i + 1..n).filter(|&j| self.matrix[(i, j)]).count())
            .sum()
    }

    pub fn is_symmetric(&self) -> bool {
        self.matrix.is_symmetric()
    }

    pub fn as_matrix(&self) -> &Matrix<bool> {
        &self.matrix
    }
}

/// Thresholded cosine-similarity graph builder
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    /// Minimum cosine similarity for an edge
    pub threshold: f64,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

impl GraphBuilder {
    /// Create a new builder with the default threshold (0.1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Build the adjacency matrix for the given sentence vectors
    pub fn build(&self, vectors: &[TfIdfVector]) -> AdjacencyMatrix {
        let n = vectors.len();
        let mut adjacency = AdjacencyMatrix::identity(n);

        let neighbors_after = |i: usize| -> Vec<usize> {
            (i + 1..n)
                .filter(|&j| vectors[i].cosine_similarity(&vectors[j]) >= self.threshold)
                .collect()
        };

        let edges: Vec<Vec<usize>> = if n >= PARALLEL_THRESHOLD {
            (0..n).into_par_iter().map(neighbors_after).collect()
        } else {
            (0..n).map(neighbors_after).collect()
        };

        for (i, targets) in edges.into_iter().enumerate() {
            for j in targets {
                adjacency.connect(i, j);
            }
        }

        tracing::debug!(
            sentences = n,
            edges = adjacency.num_edges(),
            threshold = self.threshold,
            "built similarity graph"
        );

        adjacency
    }
}
