// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! Methods for creating [`FeederGraph`] instances from circuit-scoped edge
//! records.

use super::{EdgeRowMap, FeederGraph, NodeIndexMap};
use crate::{geometry, FeederEdge};
use petgraph::graph::UnGraph;
use std::collections::HashMap;

/// `FeederGraph` instantiation.
impl FeederGraph {
    /// Builds the adjacency, coordinate and parallel-edge indexes for the
    /// given circuit-scoped edge set.
    ///
    /// Junctions are created implicitly when first referenced by an edge.
    /// Node coordinates come from each edge's geometry endpoints; the first
    /// edge to mention a junction wins, later edges are assumed consistent.
    /// Zero edges yield a valid empty graph; any routing against it fails
    /// with `NoPathPossible`.
    pub fn new(edges: Vec<FeederEdge>) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut node_indices = NodeIndexMap::new();
        let mut node_coords = HashMap::new();
        let mut edge_rows = EdgeRowMap::new();

        for (row, edge) in edges.iter().enumerate() {
            let (pac_1, pac_2) = &edge.connection;
            let a = *node_indices
                .entry(pac_1.clone())
                .or_insert_with(|| graph.add_node(pac_1.clone()));
            let b = *node_indices
                .entry(pac_2.clone())
                .or_insert_with(|| graph.add_node(pac_2.clone()));

            graph.add_edge(a, b, row);
            edge_rows.entry(Self::pair_key(a, b)).or_default().push(row);

            if let Some((first, last)) = geometry::endpoints(&edge.geometry) {
                node_coords.entry(a).or_insert(first);
                node_coords.entry(b).or_insert(last);
            }
        }

        Self {
            graph,
            node_indices,
            node_coords,
            edge_rows,
            edges,
        }
    }
}
