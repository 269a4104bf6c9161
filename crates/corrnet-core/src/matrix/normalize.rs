//! Min-max normalization of correlation values into [0,1].
//!
//! # Overview
//!
//! Estimator output mixes positive and negative associations on an arbitrary
//! scale. Before network construction the matrix is rescaled so the weakest
//! association maps to 0.0 and the strongest to 1.0:
//!
//! ```text
//! out[i,j] = round((corr[i,j] - min) / (max - min), 3)
//! ```
//!
//! with `min`/`max` taken over the WHOLE matrix (not per row or column), and
//! one override: any entry that was exactly `0.0` in the input stays exactly
//! `0.0` in the output. A zero entry means "no association" (typically a
//! previously filtered-out correlation), and plain min-max rescaling would
//! move it to `-min / (max - min)` whenever the matrix minimum is negative.

use crate::matrix::{CorrMatrix, MatrixError};

/// Rescale all entries into [0,1], rounded to 3 decimals, zeros preserved.
///
/// An empty (0×0) matrix is returned unchanged: there are no entries to
/// rescale.
///
/// # Errors
///
/// Returns [`MatrixError::ConstantMatrix`] when every entry holds the same
/// value, since `max - min` is then zero and the rescale is undefined.
#[allow(clippy::float_cmp)] // exact-zero preservation and exact-constant detection are the contract
pub fn normalize(corr: &CorrMatrix) -> Result<CorrMatrix, MatrixError> {
    let n = corr.n();
    if n == 0 {
        return Ok(corr.clone());
    }

    let values = corr.values();
    let min = values.min();
    let max = values.max();
    if max == min {
        return Err(MatrixError::ConstantMatrix { value: min });
    }

    let range = max - min;
    let mut out = values.map(|x| round3((x - min) / range));

    // Leave zeros as zeros.
    for i in 0..n {
        for j in 0..n {
            if values[(i, j)] == 0.0 {
                out[(i, j)] = 0.0;
            }
        }
    }

    CorrMatrix::new(out)
}

/// Round to 3 decimal places.
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[Vec<f64>]) -> CorrMatrix {
        CorrMatrix::from_rows(rows).expect("square test matrix")
    }

    fn assert_entry(m: &CorrMatrix, i: usize, j: usize, expected: f64) {
        assert!(
            (m.get(i, j) - expected).abs() < 1e-12,
            "entry ({i},{j}) = {}, expected {expected}",
            m.get(i, j)
        );
    }

    #[test]
    fn rescales_between_zero_and_one() {
        // min = 0, max = 0.8: 0.5 -> 0.625, 0.8 -> 1.0, zeros stay.
        let m = matrix(&[
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.8],
            vec![0.0, 0.8, 0.0],
        ]);
        let out = normalize(&m).expect("non-constant");

        assert_entry(&out, 0, 1, 0.625);
        assert_entry(&out, 1, 0, 0.625);
        assert_entry(&out, 1, 2, 1.0);
        assert_entry(&out, 2, 1, 1.0);
        assert_entry(&out, 0, 0, 0.0);
        assert_entry(&out, 0, 2, 0.0);
        assert_entry(&out, 2, 2, 0.0);
    }

    #[test]
    fn zeros_survive_negative_minimum() {
        // min = -0.5, so a plain rescale would map 0.0 to 0.333. The
        // zero-override must force it back.
        let m = matrix(&[vec![0.0, -0.5], vec![1.0, 0.0]]);
        let out = normalize(&m).expect("non-constant");

        assert_entry(&out, 0, 0, 0.0);
        assert_entry(&out, 1, 1, 0.0);
        assert_entry(&out, 0, 1, 0.0); // -0.5 is the minimum
        assert_entry(&out, 1, 0, 1.0);
    }

    #[test]
    fn rounds_to_three_decimals() {
        // (0.1 - 0) / 0.3 = 0.3333... -> 0.333
        let m = matrix(&[vec![0.0, 0.1], vec![0.3, 0.0]]);
        let out = normalize(&m).expect("non-constant");
        assert_entry(&out, 0, 1, 0.333);
    }

    #[test]
    fn idempotent_on_normalized_input() {
        // Already spans [0,1] with zeros: a second pass changes nothing.
        let m = matrix(&[vec![0.0, 1.0], vec![0.25, 0.0]]);
        let once = normalize(&m).expect("non-constant");
        let twice = normalize(&once).expect("non-constant");
        assert_eq!(once, twice);
    }

    #[test]
    fn constant_matrix_is_an_error() {
        let m = matrix(&[vec![5.0, 5.0], vec![5.0, 5.0]]);
        let err = normalize(&m).expect_err("max == min");
        assert_eq!(err, MatrixError::ConstantMatrix { value: 5.0 });
    }

    #[test]
    fn empty_matrix_unchanged() {
        let m = matrix(&[]);
        let out = normalize(&m).expect("nothing to rescale");
        assert_eq!(out.n(), 0);
    }
}
