// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! This module is only compiled when running unit tests and contains fixture
//! helpers that are shared by all tests of the `graph` module.

use crate::{EdgeKind, FeederEdge};
use geo::{Geometry, LineString};

/// A segment edge with an explicit resistance and a single-part line
/// geometry through the given coordinates.
pub(super) fn segment(
    cod_id: &str,
    pac_1: &str,
    pac_2: &str,
    coords: Vec<(f64, f64)>,
    resistance: f64,
) -> FeederEdge {
    edge(cod_id, pac_1, pac_2, coords, EdgeKind::Segment, resistance)
}

/// A zero-resistance switch edge.
pub(super) fn switch(
    cod_id: &str,
    pac_1: &str,
    pac_2: &str,
    coords: Vec<(f64, f64)>,
) -> FeederEdge {
    edge(cod_id, pac_1, pac_2, coords, EdgeKind::Switch, 0.0)
}

fn edge(
    cod_id: &str,
    pac_1: &str,
    pac_2: &str,
    coords: Vec<(f64, f64)>,
    kind: EdgeKind,
    resistance: f64,
) -> FeederEdge {
    FeederEdge {
        cod_id: cod_id.to_owned(),
        ctmt: "CT1".to_owned(),
        connection: (pac_1.to_owned(), pac_2.to_owned()),
        kind,
        geometry: Geometry::LineString(LineString::from(coords)),
        resistance,
    }
}
