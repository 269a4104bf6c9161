//! Graph construction from a correlation matrix.
//!
//! # Overview
//!
//! This module interprets a square [`CorrMatrix`] as a weighted adjacency
//! matrix over nodes `0..N-1` and builds a [`petgraph`] undirected graph.
//!
//! ## Edge Semantics
//!
//! - A matrix entry of exactly `0.0` produces **no edge**. Zeroed entries
//!   mean "no significant association" and must not inflate edge counts or
//!   density downstream.
//! - A nonzero diagonal entry `(i, i)` becomes a self-loop on node `i`.
//! - Entries are scanned in row-major order and written with
//!   update-edge (last write wins). For a symmetric matrix the two mirrored
//!   entries agree and the order is irrelevant; for an asymmetric matrix
//!   where `(i, j)` and `(j, i)` are both nonzero, the lower-triangle entry
//!   is scanned last and its value ends up as the edge weight.
//!
//! Squareness is already guaranteed by [`CorrMatrix`] construction, so the
//! builder itself is infallible.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument};

use crate::matrix::{CorrMatrix, MatrixError, normalize};

// ---------------------------------------------------------------------------
// CorrNetwork
// ---------------------------------------------------------------------------

/// An undirected weighted association network built from a [`CorrMatrix`].
///
/// Nodes are the matrix indices `0..N-1` (node weights hold the index), and
/// edge weights are the matrix entries. Nodes are added in index order, so
/// `NodeIndex::new(i)` is always node `i`.
#[derive(Debug, Clone)]
pub struct CorrNetwork {
    /// Undirected graph: nodes = matrix indices, edge weights = entries.
    pub graph: UnGraph<usize, f64>,
}

impl CorrNetwork {
    /// Build a [`CorrNetwork`] from a square matrix.
    ///
    /// See the module docs for the edge semantics (zero entries skipped,
    /// self-loops kept, row-major last write wins).
    #[must_use]
    #[instrument(skip(corr), fields(n = corr.n()))]
    #[allow(clippy::float_cmp)] // zero entries are skipped on exact equality
    pub fn from_matrix(corr: &CorrMatrix) -> Self {
        let n = corr.n();
        let mut graph = UnGraph::<usize, f64>::with_capacity(n, n);

        for i in 0..n {
            graph.add_node(i);
        }

        for i in 0..n {
            for j in 0..n {
                let weight = corr.get(i, j);
                if weight != 0.0 {
                    graph.update_edge(NodeIndex::new(i), NodeIndex::new(j), weight);
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built correlation network"
        );

        Self { graph }
    }

    /// Return the number of nodes (matrix indices) in the network.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges (nonzero associations, self-loops
    /// included).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Return the weight of the edge between `i` and `j`, if present.
    ///
    /// The graph is undirected, so `weight(i, j) == weight(j, i)`. Returns
    /// `None` for absent edges and out-of-range indices.
    #[must_use]
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.node_count() || j >= self.node_count() {
            return None;
        }
        self.graph
            .find_edge(NodeIndex::new(i), NodeIndex::new(j))
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Iterate over edges as `(i, j, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Return the number of self-loop edges (nonzero diagonal entries).
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|e| e.source() == e.target())
            .count()
    }

    /// Network density: `2m / (n * (n - 1))` with self-loops counted in `m`
    /// (the reference library's convention). Zero for graphs with fewer
    /// than two nodes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n < 2 {
            return 0.0_f64;
        }
        let max_edges = (n * (n - 1)) as f64 / 2.0;
        self.edge_count() as f64 / max_edges
    }
}

// ---------------------------------------------------------------------------
// Normalize-and-build wrapper
// ---------------------------------------------------------------------------

/// Normalize `corr` into [0,1] and build the network from the result.
///
/// Convenience composition of [`normalize`] and
/// [`CorrNetwork::from_matrix`].
///
/// # Errors
///
/// Returns [`MatrixError::ConstantMatrix`] when `corr` cannot be min-max
/// rescaled (every entry identical).
pub fn normalized_network(corr: &CorrMatrix) -> Result<CorrNetwork, MatrixError> {
    let scaled = normalize(corr)?;
    Ok(CorrNetwork::from_matrix(&scaled))
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

    #[test]
    fn one_node_per_matrix_index() {
        let m = matrix(&[
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.8],
            vec![0.0, 0.8, 0.0],
        ]);
        let net = CorrNetwork::from_matrix(&m);
        assert_eq!(net.node_count(), 3);
    }

    #[test]
    fn zero_entries_produce_no_edge() {
        let m = matrix(&[
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.8],
            vec![0.0, 0.8, 0.0],
        ]);
        let net = CorrNetwork::from_matrix(&m);

        assert_eq!(net.edge_count(), 2, "only the two nonzero pairs");
        assert!(net.weight(0, 2).is_none(), "zero entry is not an edge");
        assert!(net.weight(0, 0).is_none(), "zero diagonal is not a loop");
    }

    #[test]
    fn weights_match_matrix_entries() {
        let m = matrix(&[
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.8],
            vec![0.0, 0.8, 0.0],
        ]);
        let net = CorrNetwork::from_matrix(&m);

        assert!((net.weight(0, 1).expect("edge 0-1") - 0.5).abs() < 1e-12);
        assert!((net.weight(2, 1).expect("edge 1-2") - 0.8).abs() < 1e-12);
        // Undirected: both orders agree.
        assert_eq!(net.weight(0, 1), net.weight(1, 0));
    }

    #[test]
    fn nonzero_diagonal_becomes_self_loop() {
        let m = matrix(&[vec![0.3, 0.0], vec![0.0, 0.0]]);
        let net = CorrNetwork::from_matrix(&m);

        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.self_loop_count(), 1);
        assert!((net.weight(0, 0).expect("self-loop") - 0.3).abs() < 1e-12);
    }

    #[test]
    fn asymmetric_input_lower_triangle_wins() {
        // Row-major scan hits (0,1)=0.3 first, then (1,0)=0.7 overwrites.
        let m = matrix(&[vec![0.0, 0.3], vec![0.7, 0.0]]);
        let net = CorrNetwork::from_matrix(&m);

        assert_eq!(net.edge_count(), 1, "one undirected edge, not two");
        assert!((net.weight(0, 1).expect("edge") - 0.7).abs() < 1e-12);
    }

    #[test]
    fn empty_matrix_empty_network() {
        let net = CorrNetwork::from_matrix(&matrix(&[]));
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!((net.density() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn density_counts_present_edges_only() {
        // 3 nodes, 2 edges: density = 2 / 3.
        let m = matrix(&[
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.8],
            vec![0.0, 0.8, 0.0],
        ]);
        let net = CorrNetwork::from_matrix(&m);
        assert!((net.density() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn edges_iterator_yields_index_triples() {
        let m = matrix(&[vec![0.0, 0.5], vec![0.5, 0.0]]);
        let net = CorrNetwork::from_matrix(&m);

        let edges: Vec<(usize, usize, f64)> = net.edges().collect();
        assert_eq!(edges.len(), 1);
        let (i, j, w) = edges[0];
        assert_eq!((i.min(j), i.max(j)), (0, 1));
        assert!((w - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalized_network_rescales_weights() {
        let m = matrix(&[
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.8],
            vec![0.0, 0.8, 0.0],
        ]);
        let net = normalized_network(&m).expect("non-constant");

        assert_eq!(net.node_count(), 3);
        assert_eq!(net.edge_count(), 2);
        assert!((net.weight(0, 1).expect("edge") - 0.625).abs() < 1e-12);
        assert!((net.weight(1, 2).expect("edge") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_network_surfaces_constant_matrix() {
        let m = matrix(&[vec![5.0, 5.0], vec![5.0, 5.0]]);
        let err = normalized_network(&m).expect_err("constant matrix");
        assert_eq!(err, MatrixError::ConstantMatrix { value: 5.0 });
    }
}
