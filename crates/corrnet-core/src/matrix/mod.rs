//! Correlation-matrix type and transforms.
//!
//! # Overview
//!
//! This module holds [`CorrMatrix`], the single square-validated matrix type
//! every transform in this crate operates on, plus the two matrix-to-matrix
//! transforms applied to estimator output before a network is built:
//!
//! 1. **Significance filtering** ([`filter::filter_by_pvalues`]) — zero out
//!    correlations whose Monte Carlo p-value does not pass the threshold.
//! 2. **Normalization** ([`normalize::normalize`]) — min-max rescale into
//!    [0,1] with exact zeros preserved.
//!
//! Squareness is enforced once, at [`CorrMatrix`] construction. Downstream
//! code (transforms, the graph builder) can therefore index `(i, j)` for
//! `i, j < n` without further shape checks.

pub mod corr;
pub mod filter;
pub mod normalize;

// Re-export primary types at module level for convenience.
pub use corr::CorrMatrix;
pub use filter::{DEFAULT_SIGNIFICANCE, filter_by_pvalues, filter_default};
pub use normalize::normalize;

// ---------------------------------------------------------------------------
// MatrixError
// ---------------------------------------------------------------------------

/// Errors returned by matrix construction and transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Construction input was not square (or had ragged rows).
    #[error("matrix is not square: {rows} rows x {cols} columns")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns in the offending row.
        cols: usize,
    },

    /// The correlation and p-value matrices have different dimensions.
    #[error("shape mismatch: correlation matrix is {corr}x{corr}, p-value matrix is {pvals}x{pvals}")]
    ShapeMismatch {
        /// Side length of the correlation matrix.
        corr: usize,
        /// Side length of the p-value matrix.
        pvals: usize,
    },

    /// Min-max rescaling is undefined when every entry is identical.
    #[error("cannot min-max rescale a constant matrix (every entry is {value})")]
    ConstantMatrix {
        /// The single value the matrix is filled with.
        value: f64,
    },
}
