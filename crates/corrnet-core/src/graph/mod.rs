//! Network construction from a correlation matrix.
//!
//! # Overview
//!
//! This module turns a (typically filtered and normalized) [`CorrMatrix`]
//! into a petgraph-based undirected weighted graph, ready for whatever
//! downstream analysis the caller runs (centrality, community detection —
//! all outside this crate).
//!
//! ## Pipeline
//!
//! ```text
//! estimator corr + pvals
//!        ↓  matrix::filter::filter_by_pvalues()
//! filtered CorrMatrix
//!        ↓  matrix::normalize::normalize()
//! normalized CorrMatrix (values in [0,1], zeros preserved)
//!        ↓  build::CorrNetwork::from_matrix()
//! CorrNetwork (UnGraph<usize, f64>)
//!        ↓  stats::NetworkStats::from_network()
//! NetworkStats (density, degrees, weight summary, …)
//! ```
//!
//! ## Zero entries
//!
//! A matrix entry equal to `0.0` produces NO edge. Only nonzero entries
//! become edges, so a zeroed-out (non-significant) correlation never shows
//! up in density or degree numbers. Nonzero diagonal entries become
//! self-loops. See [`build::CorrNetwork::from_matrix`].
//!
//! ## Typical Usage
//!
//! ```rust,ignore
//! use corrnet_core::matrix::{CorrMatrix, filter_default, normalize};
//! use corrnet_core::graph::{CorrNetwork, NetworkStats};
//!
//! let significant = filter_default(&raw, &pvals)?;
//! let scaled = normalize(&significant)?;
//! let net = CorrNetwork::from_matrix(&scaled);
//! let stats = NetworkStats::from_network(&net);
//!
//! println!("nodes={} edges={} density={:.3}",
//!     stats.node_count, stats.edge_count, stats.density);
//! ```
//!
//! [`CorrMatrix`]: crate::matrix::CorrMatrix

pub mod build;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use build::{CorrNetwork, normalized_network};
pub use stats::NetworkStats;
