// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! End-to-end path resolution: raw layers in, route out.

use crate::edge::normalize_layer;
use crate::resistance::attach_resistance;
use crate::resolve::{resolve_pac, resolve_point, ResolvedNode};
use crate::{Error, FeederEdge, FeederGraph, FeederGraphConfig, LayerTable, Route};
use geo::Point;

/// Layer token of the medium-voltage segment layer.
pub const SEGMENT_LAYER: &str = "ssdmt";
/// Layer token of the switching-device layer.
pub const SWITCH_LAYER: &str = "unsemt";

/// A query location: either a geographic coordinate in the working reference
/// system or a junction PAC code.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteEndpoint {
    Coordinate(Point<f64>),
    Pac(String),
}

/// Resolves the minimum-resistance route between two locations of a feeder
/// network.
///
/// The two routable layers are normalized into a uniform edge set, both
/// locations are resolved to junctions against it, the set is scoped to the
/// circuit the *start* location resolved into, resistances are attached from
/// the auxiliary lookup tables, and the scoped graph is searched.  The
/// returned [`Route`] is marked partial when the destination is disconnected
/// from the start within that circuit.
pub fn resolve_path(
    segments: &LayerTable,
    switches: &LayerTable,
    segment_attributes: &LayerTable,
    conductor_types: &LayerTable,
    start: &RouteEndpoint,
    destination: &RouteEndpoint,
    config: &FeederGraphConfig,
) -> Result<Route, Error> {
    let mut edges = normalize_layer(segments, SEGMENT_LAYER, config)?;
    edges.extend(normalize_layer(switches, SWITCH_LAYER, config)?);
    tracing::debug!(edges = edges.len(), "normalized feeder layers");

    let start_node = resolve_endpoint(&edges, start)?;
    let dest_node = resolve_endpoint(&edges, destination)?;

    // Pathfinding is always scoped to the circuit the start resolved into.
    edges.retain(|edge| edge.ctmt == start_node.ctmt);
    attach_resistance(&mut edges, segment_attributes, conductor_types)?;
    tracing::debug!(
        circuit = %start_node.ctmt,
        edges = edges.len(),
        "scoped edge set to circuit"
    );

    let graph = FeederGraph::new(edges);
    graph.route(&start_node.pac, &dest_node.pac, config.frontier_pop_limit)
}

fn resolve_endpoint(
    edges: &[FeederEdge],
    endpoint: &RouteEndpoint,
) -> Result<ResolvedNode, Error> {
    match endpoint {
        RouteEndpoint::Coordinate(point) => resolve_point(edges, point),
        RouteEndpoint::Pac(pac) => resolve_pac(edges, pac),
    }
}
