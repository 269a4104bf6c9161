//! Summary statistics for a correlation network.
//!
//! # Statistics Provided
//!
//! - **node_count**: number of matrix indices (taxa) in the network.
//! - **edge_count**: number of nonzero associations, self-loops included.
//! - **density**: `edge_count` over the maximum possible undirected edge
//!   count `n * (n - 1) / 2`. Zero for graphs with fewer than two nodes.
//! - **self_loop_count**: nonzero diagonal entries.
//! - **isolated_node_count**: nodes with no edges at all. After
//!   significance filtering these are taxa with no surviving association.
//! - **max_degree**: highest number of edges on any single node (a
//!   self-loop counts once).
//! - **min_weight / max_weight / mean_weight**: edge-weight summary; all
//!   `0.0` when the network has no edges.

use petgraph::visit::IntoNodeIdentifiers;

use crate::graph::build::CorrNetwork;

// ---------------------------------------------------------------------------
// NetworkStats
// ---------------------------------------------------------------------------

/// Summary statistics for a [`CorrNetwork`].
///
/// Computed once by [`NetworkStats::from_network`]; plain data afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStats {
    /// Number of nodes in the network.
    pub node_count: usize,
    /// Number of edges, self-loops included.
    pub edge_count: usize,
    /// `edge_count / (n * (n - 1) / 2)`; 0.0 below two nodes.
    pub density: f64,
    /// Number of self-loop edges.
    pub self_loop_count: usize,
    /// Number of nodes without any edge.
    pub isolated_node_count: usize,
    /// Highest edge count on a single node.
    pub max_degree: usize,
    /// Smallest edge weight (0.0 when edgeless).
    pub min_weight: f64,
    /// Largest edge weight (0.0 when edgeless).
    pub max_weight: f64,
    /// Mean edge weight (0.0 when edgeless).
    pub mean_weight: f64,
}

impl NetworkStats {
    /// Compute statistics from a [`CorrNetwork`].
    #[must_use]
    pub fn from_network(net: &CorrNetwork) -> Self {
        let node_count = net.node_count();
        let edge_count = net.edge_count();
        let density = net.density();
        let self_loop_count = net.self_loop_count();

        let isolated_node_count = net
            .graph
            .node_identifiers()
            .filter(|&idx| net.graph.edges(idx).next().is_none())
            .count();

        let max_degree = net
            .graph
            .node_identifiers()
            .map(|idx| net.graph.edges(idx).count())
            .max()
            .unwrap_or(0);

        let (min_weight, max_weight, mean_weight) = weight_summary(net);

        Self {
            node_count,
            edge_count,
            density,
            self_loop_count,
            isolated_node_count,
            max_degree,
            min_weight,
            max_weight,
            mean_weight,
        }
    }

    /// Return `true` if the network has no edges.
    #[must_use]
    pub fn is_edgeless(&self) -> bool {
        self.edge_count == 0
    }
}

// ---------------------------------------------------------------------------
// Internal helpers (cast precision suppressed at function scope)
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn weight_summary(net: &CorrNetwork) -> (f64, f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0_f64;
    let mut count = 0_usize;

    for edge in net.graph.edge_references() {
        let w = *edge.weight();
        min = min.min(w);
        max = max.max(w);
        sum += w;
        count += 1;
    }

    if count == 0 {
        return (0.0, 0.0, 0.0);
    }
    (min, max, sum / count as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
