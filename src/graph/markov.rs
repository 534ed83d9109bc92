//! Markov chain transition matrix
//!
//! Column `j` holds the distribution of the next state given the walker is
//! at sentence `j`: uniform over `j`'s neighbours, mixed with a uniform jump
//! to any sentence with probability `damping`.
//!
//! `T(i, j) = (1 - d) * adj(i, j) / deg(j) + d / N`
//!
//! Every entry is at least `d / N` and every column sums to 1, so for
//! `d > 0` the chain is irreducible and aperiodic and has a unique
//! stationary distribution.

use super::builder::AdjacencyMatrix;
use super::matrix::Matrix;

/// Build the damped, column-stochastic transition matrix for `adjacency`
pub fn transition_matrix(adjacency: &AdjacencyMatrix, damping: f64) -> Matrix<f64> {
    let n = adjacency.num_nodes();
    let mut result = Matrix::square(n);
    if n == 0 {
        return result;
    }

    let teleport = damping / n as f64;

    for j in 0..n {
        // Self-loops guarantee deg >= 1
        let degree = adjacency.degree(j).max(1);
        let walk = (1.0 - damping) / degree as f64;

        for i in 0..n {
            let base = if adjacency.is_adjacent(i, j) { walk } else { 0.0 };
            result[(i, j)] = base + teleport;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_connected_pair() {
        let mut adj = AdjacencyMatrix::identity(2);
        adj.connect(0, 1);

        let t = transition_matrix(&adj, 0.15);

        for i in 0..2 {
            for j in 0..2 {
                assert!((t[(i, j)] - 0.5).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_single_sentence() {
        let t = transition_matrix(&AdjacencyMatrix::identity(1), 0.15);
        assert!((t[(0, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_columns_stochastic_and_bounded_below() {
        // 0 - 1 - 2   3 (isolated)
        let mut adj = AdjacencyMatrix::identity(4);
        adj.connect(0, 1);
        adj.connect(1, 2);

        let damping = 0.15;
        let t = transition_matrix(&adj, damping);
        let floor = damping / 4.0;

        for j in 0..4 {
            assert!((t.column_sum(j) - 1.0).abs() < 1e-9);
        }
        assert!(t.min_entry().unwrap() >= floor - 1e-12);

        // Node 1 has degree 3 (itself, 0 and 2)
        assert!((t[(0, 1)] - (0.85 / 3.0 + floor)).abs() < 1e-12);
        // Isolated node keeps all walk mass on itself
        assert!((t[(3, 3)] - (0.85 + floor)).abs() < 1e-12);
        assert!((t[(0, 3)] - floor).abs() < 1e-12);
    }

    #[test]
    fn test_zero_damping_is_plain_random_walk() {
        let mut adj = AdjacencyMatrix::identity(3);
        adj.connect(0, 2);

        let t = transition_matrix(&adj, 0.0);

        assert!((t[(0, 0)] - 0.5).abs() < 1e-12);
        assert!((t[(2, 0)] - 0.5).abs() < 1e-12);
        assert_eq!(t[(1, 0)], 0.0);
    }

    #[test]
    fn test_empty() {
        let t = transition_matrix(&AdjacencyMatrix::identity(0), 0.15);
        assert!(t.is_empty());
    }
}
