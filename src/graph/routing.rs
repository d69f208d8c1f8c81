// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! Minimum-resistance routing over a [`FeederGraph`].

use super::{reconstruct, FeederGraph};
use crate::{geometry, Error, Route};
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A frontier entry of the search.
///
/// The comparison is reversed so that `BinaryHeap` pops the smallest
/// cumulative resistance first; equal-cost entries pop in ascending
/// node-index order, which makes the search deterministic for a given edge
/// insertion order.
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: OrderedFloat<f64>,
    node: NodeIndex,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Routing methods.
impl FeederGraph {
    /// Computes the minimum-cumulative-resistance route between two PAC
    /// codes.
    ///
    /// When the destination is unreachable from the start within the scoped
    /// circuit, the route degrades to the reachable junction geodesically
    /// nearest the destination's coordinate and is marked partial.  When not
    /// even that is possible (the destination has no known coordinate in the
    /// circuit, or nothing at all is reachable), the request fails with
    /// `NoPathPossible`.
    pub fn route(
        &self,
        start_pac: &str,
        dest_pac: &str,
        pop_limit: Option<usize>,
    ) -> Result<Route, Error> {
        if start_pac == dest_pac {
            // Trivially complete: a single junction, no edges to travel.
            return Ok(Route {
                nodes: vec![start_pac.to_owned()],
                edges: Vec::new(),
                complete: true,
            });
        }

        let Some(&start) = self.node_indices.get(start_pac) else {
            return Err(Error::no_path_possible(format!(
                "Start node {} is not part of the scoped circuit.",
                start_pac
            )));
        };
        let goal = self.node_indices.get(dest_pac).copied();

        let (dist, prev) = self.shortest_distances(start, goal, pop_limit);

        if let Some(goal) = goal {
            let nodes = reconstruct::predecessor_chain(&prev, start, goal);
            if !nodes.is_empty() {
                return Ok(self.assemble(&nodes, true));
            }
        }

        // The frontier was exhausted before the destination was reached:
        // degrade to the reachable node geodesically nearest the destination.
        let dest_coord = goal
            .and_then(|goal| self.node_coords.get(&goal))
            .copied()
            .ok_or_else(|| {
                Error::no_path_possible(format!(
                    "No coordinate known for destination {} within the scoped circuit.",
                    dest_pac
                ))
            })?;

        let terminal = dist
            .keys()
            .filter_map(|node| {
                self.node_coords
                    .get(node)
                    .map(|coord| (*node, geometry::geodesic_distance_m(*coord, dest_coord)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
            .map(|(node, _)| node)
            .ok_or_else(|| {
                Error::no_path_possible(
                    "No reachable node with a known coordinate to degrade to.",
                )
            })?;

        tracing::warn!(
            start = start_pac,
            destination = dest_pac,
            "destination unreachable, degrading to partial route"
        );

        let nodes = reconstruct::predecessor_chain(&prev, start, terminal);
        if nodes.is_empty() {
            return Err(Error::no_path_possible(format!(
                "No usable path from {} towards {}.",
                start_pac, dest_pac
            )));
        }
        Ok(self.assemble(&nodes, false))
    }

    /// Single-source shortest distances by cumulative resistance.
    ///
    /// A node may be pushed onto the frontier multiple times with different
    /// tentative distances; only the pop with the smallest distance is
    /// authoritative, later pops are discarded as stale.  The search stops
    /// early once the goal is popped, and `pop_limit` bounds the number of
    /// pops as an external deadline.
    fn shortest_distances(
        &self,
        start: NodeIndex,
        goal: Option<NodeIndex>,
        pop_limit: Option<usize>,
    ) -> (HashMap<NodeIndex, f64>, HashMap<NodeIndex, NodeIndex>) {
        let mut dist: HashMap<NodeIndex, f64> = HashMap::new();
        let mut prev: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut heap = BinaryHeap::new();
        let mut pops = 0usize;

        dist.insert(start, 0.0);
        heap.push(State {
            cost: OrderedFloat(0.0),
            node: start,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if cost.0 > dist.get(&node).copied().unwrap_or(f64::INFINITY) {
                continue; // stale entry, a better pop already finalized this node
            }
            pops += 1;
            if pop_limit.is_some_and(|limit| pops > limit) {
                break;
            }
            if Some(node) == goal {
                break;
            }

            for edge in self.graph.edges(node) {
                let next = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                let candidate = cost.0 + self.edges[*edge.weight()].resistance;
                if candidate < dist.get(&next).copied().unwrap_or(f64::INFINITY) {
                    dist.insert(next, candidate);
                    prev.insert(next, node);
                    heap.push(State {
                        cost: OrderedFloat(candidate),
                        node: next,
                    });
                }
            }
        }

        (dist, prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{segment, switch};

    /// A-B-C line with resistances 1.0 and 2.0, plus a D-E component that is
    /// disconnected from it.
    fn split_feeder() -> FeederGraph {
        FeederGraph::new(vec![
            segment("S1", "A", "B", vec![(-51.0, -25.0), (-50.999, -25.0)], 1.0),
            segment("S2", "B", "C", vec![(-50.999, -25.0), (-50.998, -25.0)], 2.0),
            segment("S3", "D", "E", vec![(-50.99, -25.0), (-50.989, -25.0)], 1.0),
        ])
    }

    #[test]
    fn test_full_route() {
        let graph = split_feeder();
        let route = graph.route("A", "C", None).unwrap();

        assert!(route.complete);
        assert_eq!(route.nodes, ["A", "B", "C"]);
        assert_eq!(
            route.edges.iter().map(|e| e.cod_id.as_str()).collect::<Vec<_>>(),
            ["S1", "S2"]
        );
        assert!((route.total_resistance() - 3.0).abs() < 1e-12);
        assert_eq!(route.layer_name(), "rota_completa");
    }

    #[test]
    fn test_cheapest_route_wins_over_fewest_hops() {
        // A direct A-C edge exists but is dearer than the A-B-C detour.
        let graph = FeederGraph::new(vec![
            segment("S1", "A", "B", vec![(-51.0, -25.0), (-50.999, -25.0)], 1.0),
            segment("S2", "B", "C", vec![(-50.999, -25.0), (-50.998, -25.0)], 1.0),
            segment("S3", "A", "C", vec![(-51.0, -25.0), (-50.998, -25.0)], 5.0),
        ]);
        let route = graph.route("A", "C", None).unwrap();
        assert_eq!(route.nodes, ["A", "B", "C"]);
        assert!((route.total_resistance() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_switches_route_for_free() {
        let graph = FeederGraph::new(vec![
            segment("S1", "A", "B", vec![(-51.0, -25.0), (-50.999, -25.0)], 1.0),
            switch("W1", "B", "C", vec![(-50.999, -25.0), (-50.998, -25.0)]),
        ]);
        let route = graph.route("A", "C", None).unwrap();
        assert!(route.complete);
        assert!((route.total_resistance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_start_equals_destination() {
        let graph = split_feeder();
        let route = graph.route("B", "B", None).unwrap();

        assert!(route.complete);
        assert_eq!(route.nodes, ["B"]);
        assert!(route.edges.is_empty());
        assert_eq!(route.total_resistance(), 0.0);
    }

    #[test]
    fn test_disconnected_destination_degrades_to_nearest_reachable() {
        let graph = split_feeder();
        // D-E is a separate component; C is the reachable node nearest D.
        let route = graph.route("A", "D", None).unwrap();

        assert!(!route.complete);
        assert_eq!(route.nodes, ["A", "B", "C"]);
        assert_eq!(route.layer_name(), "rota_parcial");
    }

    #[test]
    fn test_unknown_destination_is_no_path() {
        let graph = split_feeder();
        assert!(graph.route("A", "Z", None).is_err_and(|e| e
            == Error::no_path_possible(
                "No coordinate known for destination Z within the scoped circuit."
            )));
    }

    #[test]
    fn test_empty_graph_is_no_path() {
        let graph = FeederGraph::new(Vec::new());
        assert!(graph.route("A", "B", None).is_err_and(|e| e
            == Error::no_path_possible("Start node A is not part of the scoped circuit.")));
    }

    #[test]
    fn test_pop_limit_degrades_to_partial() {
        let graph = split_feeder();
        // One pop finalizes the start node only, so the search cannot reach C
        // and falls back to the nearest node discovered so far.
        let route = graph.route("A", "C", Some(1)).unwrap();
        assert!(!route.complete);
        assert_eq!(route.nodes.first().map(String::as_str), Some("A"));
    }

    #[test]
    fn test_distances_are_shortest_and_consistent() {
        let graph = FeederGraph::new(vec![
            segment("S1", "A", "B", vec![(-51.0, -25.0), (-50.999, -25.0)], 1.0),
            segment("S2", "B", "C", vec![(-50.999, -25.0), (-50.998, -25.0)], 1.0),
            segment("S3", "A", "C", vec![(-51.0, -25.0), (-50.998, -25.0)], 5.0),
            segment("S4", "C", "D", vec![(-50.998, -25.0), (-50.997, -25.0)], 1.0),
        ]);
        let start = graph.node_indices["A"];
        let (dist, prev) = graph.shortest_distances(start, None, None);

        assert_eq!(dist[&graph.node_indices["A"]], 0.0);
        assert_eq!(dist[&graph.node_indices["B"]], 1.0);
        assert_eq!(dist[&graph.node_indices["C"]], 2.0);
        assert_eq!(dist[&graph.node_indices["D"]], 3.0);

        // Every predecessor link is a tight relaxation: dist[v] is exactly
        // dist[u] plus the resistance of some connecting edge.
        for (v, u) in &prev {
            let key = FeederGraph::pair_key(*u, *v);
            let tight = graph.edge_rows[&key]
                .iter()
                .any(|&row| (dist[u] + graph.edges[row].resistance - dist[v]).abs() < 1e-12);
            assert!(tight);
        }
    }

    #[test]
    fn test_equal_cost_ties_are_deterministic() {
        // Two parallel zero-cost routes A-B-D and A-C-D. The tie-break pops
        // lower node indices first, so B (inserted before C) is finalized
        // first and provides D's predecessor.
        let edges = vec![
            switch("W1", "A", "B", vec![(-51.0, -25.0), (-50.999, -25.0)]),
            switch("W2", "A", "C", vec![(-51.0, -25.0), (-50.999, -25.001)]),
            switch("W3", "B", "D", vec![(-50.999, -25.0), (-50.998, -25.0)]),
            switch("W4", "C", "D", vec![(-50.999, -25.001), (-50.998, -25.0)]),
        ];
        for _ in 0..8 {
            let graph = FeederGraph::new(edges.clone());
            let route = graph.route("A", "D", None).unwrap();
            assert_eq!(route.nodes, ["A", "B", "D"]);
        }
    }
}
