//! Dense row-major matrices
//!
//! Per-document sentence graphs are small (one row per sentence), so a dense
//! `N x N` buffer is simpler and faster than a sparse layout here. Reusing
//! this for corpus-scale graphs would need a sparse representation instead.

use crate::errors::{LexRankError, Result};
use rayon::prelude::*;
use std::ops::{Index, IndexMut};

/// Row count above which matrix-vector products are split across threads
const PARALLEL_ROWS: usize = 256;

/// A dense, row-major matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Matrix<T> {
    /// Create a `rows x cols` matrix filled with `T::default()`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }

    /// Create an `n x n` matrix filled with `T::default()`
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Build a matrix from row slices. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(LexRankError::DimensionMismatch {
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Set entry `(i, j)`. Panics when out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Raw row-major storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: PartialEq> Matrix<T> {
    /// `true` when the matrix is square and equal to its transpose
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.rows).all(|i| (i + 1..self.cols).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl Matrix<f64> {
    /// Sum of column `j`
    pub fn column_sum(&self, j: usize) -> f64 {
        (0..self.rows).map(|i| self[(i, j)]).sum()
    }

    /// Smallest entry, or `None` for an empty matrix
    pub fn min_entry(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }

    /// Matrix-vector product `self * x`
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.cols {
            return Err(LexRankError::DimensionMismatch {
                expected: self.cols,
                found: x.len(),
            });
        }

        let dot = |row: &[f64]| row.iter().zip(x).map(|(a, b)| a * b).sum::<f64>();

        // cols == 0 would make chunks_exact panic
        if self.cols == 0 {
            return Ok(vec![0.0; self.rows]);
        }

        let out: Vec<f64> = if self.rows >= PARALLEL_ROWS {
            self.data.par_chunks_exact(self.cols).map(dot).collect()
        } else {
            self.data.chunks_exact(self.cols).map(dot).collect()
        };
        Ok(out)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.cols + j]
    }
}
