//! Significance filtering of raw correlations.
//!
//! # Overview
//!
//! The upstream estimator pairs its correlation matrix with a p-value matrix
//! from Monte Carlo resampling. Filtering keeps only the entries judged
//! statistically significant: an entry survives when its p-value is strictly
//! below the threshold, and is zeroed when the p-value is greater than OR
//! EQUAL to it. An entry sitting exactly at the threshold is rejected.
//!
//! The filter is pure: it returns a new matrix and leaves both inputs
//! untouched, so callers that still need the unfiltered correlations keep
//! them.

use crate::matrix::{CorrMatrix, MatrixError};

/// Conventional significance threshold applied by [`filter_default`].
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Zero out every correlation whose p-value is `>= p`.
///
/// Entries with `pvals[i,j] < p` are copied through unchanged.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] when the two matrices have
/// different dimensions.
pub fn filter_by_pvalues(
    raw_corr: &CorrMatrix,
    pvals: &CorrMatrix,
    p: f64,
) -> Result<CorrMatrix, MatrixError> {
    let n = raw_corr.n();
    if pvals.n() != n {
        return Err(MatrixError::ShapeMismatch {
            corr: n,
            pvals: pvals.n(),
        });
    }

    let out = raw_corr
        .values()
        .zip_map(pvals.values(), |c, pv| if pv >= p { 0.0 } else { c });
    CorrMatrix::new(out)
}

/// [`filter_by_pvalues`] at the conventional 0.05 threshold.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] when the two matrices have
/// different dimensions.
pub fn filter_default(raw_corr: &CorrMatrix, pvals: &CorrMatrix) -> Result<CorrMatrix, MatrixError> {
    filter_by_pvalues(raw_corr, pvals, DEFAULT_SIGNIFICANCE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
