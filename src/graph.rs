// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! A resistance-weighted graph of one feeder circuit, and routing over it.

mod creation;
mod reconstruct;
mod routing;

#[cfg(test)]
mod test_utils;

use crate::FeederEdge;
use geo_types::Coord;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Junction PAC codes stored in the `UnGraph` can be addressed with
/// `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any PAC code, so
/// that junctions can be retrieved from their codes.
pub(crate) type NodeIndexMap = HashMap<String, NodeIndex>;

/// The network may contain parallel assets between the same two junctions, so
/// the unordered node pair maps to *every* edge row connecting it, never to a
/// single one.
pub(crate) type EdgeRowMap = HashMap<(NodeIndex, NodeIndex), Vec<usize>>;

/// A graph of the segments and switches of a single feeder circuit, weighted
/// by electrical resistance.
///
/// Built fresh for one path request from circuit-scoped
/// [`FeederEdge`] records; never shared or persisted across requests.
pub struct FeederGraph {
    /// Undirected topology; edge weights index into `edges`.
    graph: UnGraph<String, usize>,
    node_indices: NodeIndexMap,
    node_coords: HashMap<NodeIndex, Coord<f64>>,
    edge_rows: EdgeRowMap,
    edges: Vec<FeederEdge>,
}

impl FeederGraph {
    /// The circuit-scoped edge records the graph was built from.
    pub fn edges(&self) -> &[FeederEdge] {
        &self.edges
    }

    /// Number of distinct junctions in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph, parallel assets counted separately.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the given PAC code is a junction of this graph.
    pub fn contains_node(&self, pac: &str) -> bool {
        self.node_indices.contains_key(pac)
    }

    /// Order-independent key for the parallel-edge index.
    pub(crate) fn pair_key(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
