//! Power iteration solver
//!
//! Repeatedly applies `x <- T * x` to a probability vector until no entry
//! moves by more than the threshold. For a column-stochastic `T` with
//! strictly positive entries this converges to the unique stationary
//! distribution from any starting distribution.

use super::PowerIterationResult;
use crate::errors::{LexRankError, Result};
use crate::graph::matrix::Matrix;

/// Power iteration with an explicit iteration cap
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the largest per-entry change
    pub threshold: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            threshold: 1e-5,
        }
    }
}

impl PowerIteration {
    /// Create a new solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run from the uniform distribution
    pub fn run(&self, transition: &Matrix<f64>) -> Result<PowerIterationResult> {
        let n = transition.rows();
        if n == 0 {
            return self.run_from(transition, &[]);
        }
        self.run_from(transition, &vec![1.0 / n as f64; n])
    }

    /// Run from the given starting distribution.
    ///
    /// Fails with [`LexRankError::NonConvergence`] once `max_iterations`
    /// steps have been taken without meeting the threshold.
    pub fn run_from(
        &self,
        transition: &Matrix<f64>,
        initial: &[f64],
    ) -> Result<PowerIterationResult> {
        if !transition.is_square() {
            return Err(LexRankError::DimensionMismatch {
                expected: transition.rows(),
                found: transition.cols(),
            });
        }
        if initial.len() != transition.cols() {
            return Err(LexRankError::DimensionMismatch {
                expected: transition.cols(),
                found: initial.len(),
            });
        }
        if initial.is_empty() {
            return Ok(PowerIterationResult::new(Vec::new(), 0, 0.0));
        }

        let mut scores = initial.to_vec();
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations {
            let next = transition.mul_vec(&scores)?;
            iterations += 1;

            delta = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);
            scores = next;

            if delta <= self.threshold {
                tracing::debug!(iterations, delta, "power iteration converged");
                return Ok(PowerIterationResult::new(scores, iterations, delta));
            }
        }

        tracing::warn!(iterations, delta, "power iteration hit its iteration cap");
        Err(LexRankError::NonConvergence { iterations, delta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::AdjacencyMatrix;
    use crate::graph::markov::transition_matrix;

    fn path_graph(n: usize) -> Matrix<f64> {
        let mut adj = AdjacencyMatrix::identity(n);
        for i in 1..n {
            adj.connect(i - 1, i);
        }
        transition_matrix(&adj, 0.15)
    }

    fn star_graph(spokes: usize) -> Matrix<f64> {
        let mut adj = AdjacencyMatrix::identity(spokes + 1);
        for s in 1..=spokes {
            adj.connect(0, s);
        }
        transition_matrix(&adj, 0.15)
    }

    #[test]
    fn test_single_node_converges_in_one_step() {
        let t = transition_matrix(&AdjacencyMatrix::identity(1), 0.15);
        let result = PowerIteration::new().run(&t).unwrap();

        assert_eq!(result.scores.len(), 1);
        assert!((result.scores[0] - 1.0).abs() < 1e-12);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_symmetric_pair_equal_scores() {
        let mut adj = AdjacencyMatrix::identity(2);
        adj.connect(0, 1);
        let t = transition_matrix(&adj, 0.15);

        let result = PowerIteration::new().run(&t).unwrap();

        assert!((result.scores[0] - 0.5).abs() < 1e-9);
        assert!((result.scores[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let result = PowerIteration::new().run(&star_graph(4)).unwrap();

        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
        assert_eq!(result.top_n(1)[0].0, 0);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = PowerIteration::new().run(&path_graph(7)).unwrap();

        assert!((result.total() - 1.0).abs() < 1e-5);
        assert!(result.delta <= 1e-5);
    }

    #[test]
    fn test_result_is_stationary() {
        let t = path_graph(5);
        let result = PowerIteration::new().with_threshold(1e-12).run(&t).unwrap();

        let next = t.mul_vec(&result.scores).unwrap();
        for (a, b) in result.scores.iter().zip(&next) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn test_start_vector_does_not_matter() {
        let t = path_graph(4);
        let solver = PowerIteration::new().with_threshold(1e-12);

        let uniform = solver.run(&t).unwrap();
        let skewed = solver.run_from(&t, &[1.0, 0.0, 0.0, 0.0]).unwrap();

        for (a, b) in uniform.scores.iter().zip(&skewed.scores) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let t = path_graph(5);
        let err = PowerIteration::new()
            .with_max_iterations(1)
            .with_threshold(0.0)
            .run_from(&t, &[1.0, 0.0, 0.0, 0.0, 0.0])
            .unwrap_err();

        match err {
            LexRankError::NonConvergence { iterations, delta } => {
                assert_eq!(iterations, 1);
                assert!(delta > 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dimension_checks() {
        let t = path_graph(3);
        assert!(matches!(
            PowerIteration::new().run_from(&t, &[1.0]),
            Err(LexRankError::DimensionMismatch { expected: 3, found: 1 })
        ));

        let rect: Matrix<f64> = Matrix::new(2, 3);
        assert!(matches!(
            PowerIteration::new().run(&rect),
            Err(LexRankError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let result = PowerIteration::new().run(&Matrix::square(0)).unwrap();
        assert!(result.scores.is_empty());
        assert_eq!(result.iterations, 0);
    }
}
