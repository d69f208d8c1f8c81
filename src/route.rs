// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! The result of a path computation.

use crate::FeederEdge;

/// An ordered route through one feeder circuit.
///
/// A route is complete when it reaches the requested destination.  When the
/// destination is topologically disconnected from the start within the scoped
/// circuit, the route instead ends at the reachable junction geodesically
/// nearest the destination and is marked partial; that is a valid result, not
/// an error.
#[derive(Clone, Debug)]
pub struct Route {
    /// Junction sequence from the start to the terminal node.
    pub nodes: Vec<String>,
    /// The edge records connecting consecutive junctions, in travel order.
    pub edges: Vec<FeederEdge>,
    /// True when the terminal node is the requested destination.
    pub complete: bool,
}

impl Route {
    /// The layer name under which this route would be persisted in a vector
    /// container.
    pub fn layer_name(&self) -> &'static str {
        if self.complete {
            "rota_completa"
        } else {
            "rota_parcial"
        }
    }

    /// Cumulative electrical resistance along the route, in ohms.
    pub fn total_resistance(&self) -> f64 {
        self.edges.iter().map(|edge| edge.resistance).sum()
    }
}
