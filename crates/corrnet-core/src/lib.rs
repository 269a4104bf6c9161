#![forbid(unsafe_code)]
//! corrnet-core library.
//!
//! # Overview
//!
//! Post-processing helpers for the interaction matrix produced by a
//! compositional-correlation estimator (SparCC-style): significance
//! filtering against a Monte Carlo p-value matrix, min-max normalization
//! into [0,1] with exact zeros preserved, and construction of an undirected
//! weighted [`petgraph`] network for downstream analysis.
//!
//! ```text
//! estimator corr + pvals
//!        ↓  filter_by_pvalues()     zero entries with p >= threshold
//!        ↓  normalize()             rescale to [0,1], zeros preserved
//!        ↓  CorrNetwork::from_matrix()
//! UnGraph<usize, f64>
//! ```
//!
//! Each step is a pure transformation; none mutates its input.
//!
//! # Conventions
//!
//! - **Errors**: fallible operations return `Result<_, MatrixError>`.
//! - **Logging**: `tracing` macros; no subscriber is installed here.

pub mod graph;
pub mod matrix;

pub use graph::{CorrNetwork, NetworkStats, normalized_network};
pub use matrix::{
    CorrMatrix, DEFAULT_SIGNIFICANCE, MatrixError, filter_by_pvalues, filter_default, normalize,
};
