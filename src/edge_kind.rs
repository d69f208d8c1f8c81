// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! This module defines the `EdgeKind` enum, which represents the kind of
//! asset a feeder edge stands for.

use crate::Error;
use std::fmt::Display;

/// The kind of physical asset an edge represents.
///
/// Edges come from one of two input layers: `ssdmt` carries the
/// medium-voltage cable segments, `unsemt` the switching devices.  Segments
/// contribute electrical resistance to a route; switches are zero-impedance
/// connectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Segment,
    Switch,
}

impl EdgeKind {
    /// Parses a layer token into an [`EdgeKind`].
    ///
    /// Returns an error for anything other than `ssdmt` or `unsemt`.
    pub fn from_layer(layer_name: &str) -> Result<Self, Error> {
        match layer_name {
            "ssdmt" => Ok(EdgeKind::Segment),
            "unsemt" => Ok(EdgeKind::Switch),
            other => Err(Error::invalid_edge_kind(format!(
                "Invalid layer type: \"{}\". Expected \"ssdmt\" or \"unsemt\".",
                other
            ))),
        }
    }

    /// Returns true for cable segments.
    pub fn is_segment(&self) -> bool {
        *self == EdgeKind::Segment
    }

    /// Returns true for switching devices.
    pub fn is_switch(&self) -> bool {
        *self == EdgeKind::Switch
    }
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Segment => write!(f, "ssdmt"),
            EdgeKind::Switch => write!(f, "unsemt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_token_parsing() {
        assert_eq!(EdgeKind::from_layer("ssdmt"), Ok(EdgeKind::Segment));
        assert_eq!(EdgeKind::from_layer("unsemt"), Ok(EdgeKind::Switch));
        assert!(EdgeKind::from_layer("untrmt").is_err_and(|e| e
            == Error::invalid_edge_kind(
                "Invalid layer type: \"untrmt\". Expected \"ssdmt\" or \"unsemt\"."
            )));
    }

    #[test]
    fn test_predicates_and_display() {
        assert!(EdgeKind::Segment.is_segment());
        assert!(!EdgeKind::Segment.is_switch());
        assert!(EdgeKind::Switch.is_switch());
        assert_eq!(EdgeKind::Segment.to_string(), "ssdmt");
        assert_eq!(EdgeKind::Switch.to_string(), "unsemt");
    }
}
