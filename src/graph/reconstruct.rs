// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! Conversion of a resolved node sequence back into an ordered sequence of
//! edge records.

use super::FeederGraph;
use crate::{geometry, FeederEdge, Route};
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Walks the predecessor map from `target` back to `start`.
///
/// Returns the node sequence in travel order, or an empty sequence when the
/// chain is broken (the target was never reached).
pub(super) fn predecessor_chain(
    prev: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut cursor = target;
    while cursor != start {
        match prev.get(&cursor) {
            Some(&predecessor) => {
                path.push(predecessor);
                cursor = predecessor;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Route reconstruction.
impl FeederGraph {
    /// Builds a [`Route`] from a node sequence resolved by the search.
    pub(super) fn assemble(&self, nodes: &[NodeIndex], complete: bool) -> Route {
        Route {
            nodes: nodes.iter().map(|&node| self.graph[node].clone()).collect(),
            edges: self.reconstruct(nodes),
            complete,
        }
    }

    /// Selects one edge record per consecutive node pair.
    ///
    /// Parallel assets between the same pair resolve to the one with the
    /// smallest WGS84 geodesic line length; pairs no edge connects are
    /// skipped.
    fn reconstruct(&self, nodes: &[NodeIndex]) -> Vec<FeederEdge> {
        if nodes.len() < 2 {
            return Vec::new();
        }
        let mut edges = Vec::with_capacity(nodes.len() - 1);
        for pair in nodes.windows(2) {
            let Some(rows) = self.edge_rows.get(&Self::pair_key(pair[0], pair[1])) else {
                continue;
            };
            let best = rows.iter().copied().min_by(|&a, &b| {
                geometry::geodesic_length_m(&self.edges[a].geometry)
                    .total_cmp(&geometry::geodesic_length_m(&self.edges[b].geometry))
                    .then_with(|| a.cmp(&b))
            });
            if let Some(row) = best {
                edges.push(self.edges[row].clone());
            }
        }
        edges
    }
}
