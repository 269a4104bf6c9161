//! The square-validated correlation matrix type.
//!
//! # Overview
//!
//! Upstream estimators hand over an N×N interaction matrix either as plain
//! row-major numbers or as a labeled table (taxa names on rows/columns).
//! [`CorrMatrix`] is the one concrete type both arrive as: construction
//! validates squareness, labels are discarded (row/column identity is the
//! caller's concern), and everything downstream indexes `(i, j)` freely.

use nalgebra::DMatrix;

use crate::matrix::MatrixError;

// ---------------------------------------------------------------------------
// CorrMatrix
// ---------------------------------------------------------------------------

/// A square matrix of pairwise association strengths (or p-values).
///
/// Wraps a dense [`DMatrix<f64>`] that is guaranteed square. Both the raw
/// correlation matrix and its companion p-value matrix use this type, since
/// they share the same shape contract.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrMatrix {
    values: DMatrix<f64>,
}

impl CorrMatrix {
    /// Wrap an existing dense matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if `values` has a different number
    /// of rows and columns.
    pub fn new(values: DMatrix<f64>) -> Result<Self, MatrixError> {
        if values.nrows() != values.ncols() {
            return Err(MatrixError::NotSquare {
                rows: values.nrows(),
                cols: values.ncols(),
            });
        }
        Ok(Self { values })
    }

    /// Build from row-major rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if any row's length differs from
    /// the number of rows (ragged input included).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let n = rows.len();
        for row in rows {
            if row.len() != n {
                return Err(MatrixError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Self {
            values: DMatrix::from_row_slice(n, n, &flat),
        })
    }

    /// Build from labeled rows, discarding the labels.
    ///
    /// Row/column identity is preserved externally by the caller; this crate
    /// only ever works with positional indices `0..n`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] on ragged or non-square input.
    pub fn from_labeled_rows(rows: &[(&str, Vec<f64>)]) -> Result<Self, MatrixError> {
        let unlabeled: Vec<Vec<f64>> = rows.iter().map(|(_, row)| row.clone()).collect();
        Self::from_rows(&unlabeled)
    }

    /// Side length of the matrix.
    #[must_use]
    pub fn n(&self) -> usize {
        self.values.nrows()
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[(row, col)]
    }

    /// Borrow the underlying dense matrix.
    #[must_use]
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Unwrap into the underlying dense matrix.
    #[must_use]
    pub fn into_inner(self) -> DMatrix<f64> {
        self.values
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
