// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! Resolution of query locations to specific junction nodes.
//!
//! A query location is either a geographic coordinate or a PAC code.  Both
//! modes resolve against the full normalized edge set, before any circuit
//! scoping, and report the circuit of the edge that matched so the caller can
//! scope the graph.

use crate::{geometry, Error, FeederEdge};
use geo::Point;

/// A query location resolved to a junction of the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedNode {
    /// PAC code of the junction.
    pub pac: String,
    /// Circuit of the edge the resolution matched; pathfinding is scoped to
    /// it.
    pub ctmt: String,
}

/// Resolves a geographic point to the junction nearest to it.
///
/// The matching edge is the one whose nearest endpoint vertex (by planar
/// distance in the working reference system) is closest to the point; among
/// that edge's two junctions, the geodesically (WGS84) nearer one wins.
pub fn resolve_point(edges: &[FeederEdge], point: &Point<f64>) -> Result<ResolvedNode, Error> {
    let mut nearest: Option<(&FeederEdge, f64)> = None;
    for edge in edges {
        let distance = geometry::min_endpoint_distance(&edge.geometry, point);
        match nearest {
            Some((_, best)) if best <= distance => {}
            _ => nearest = Some((edge, distance)),
        }
    }
    let Some((edge, _)) = nearest else {
        return Err(Error::no_edges_available(
            "No edges available to resolve a coordinate against.",
        ));
    };

    Ok(ResolvedNode {
        pac: nearest_endpoint_pac(edge, point),
        ctmt: edge.ctmt.clone(),
    })
}

/// Of the edge's two junctions, the one whose endpoint coordinate is
/// geodesically nearer the point.  Ties keep the first junction.
fn nearest_endpoint_pac(edge: &FeederEdge, point: &Point<f64>) -> String {
    match geometry::endpoints(&edge.geometry) {
        Some((first, last)) => {
            let query = point.0;
            let to_first = geometry::geodesic_distance_m(first, query);
            let to_last = geometry::geodesic_distance_m(last, query);
            if to_last < to_first {
                edge.connection.1.clone()
            } else {
                edge.connection.0.clone()
            }
        }
        None => edge.connection.0.clone(),
    }
}

/// Resolves a PAC code through the first edge that references it.
pub fn resolve_pac(edges: &[FeederEdge], pac: &str) -> Result<ResolvedNode, Error> {
    edges
        .iter()
        .find(|edge| edge.touches(pac))
        .map(|edge| ResolvedNode {
            pac: pac.to_owned(),
            ctmt: edge.ctmt.clone(),
        })
        .ok_or_else(|| Error::node_not_found(format!("No edge references the PAC code: {pac}")))
}
