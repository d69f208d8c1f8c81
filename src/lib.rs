// License: MIT
// Copyright © 2026 Fontesul Engenharia

/*!
# Feeder Route Graph

This is a library for resolving point-of-interest routes over a medium-voltage
distribution feeder: given the feeder's cable segments and switching devices,
it finds the path of least cumulative electrical resistance between two
arbitrary locations of the network.

## Input layers

The engine receives four pre-loaded [`LayerTable`]s: the `ssdmt` segment
layer, the `unsemt` switching-device layer, and two auxiliary lookup tables
carrying segment lengths/conductor types and per-kilometer conductor
resistances.  All geometries are expected in a single fixed geographic
reference system (EPSG:4674 by default, see [`FeederGraphConfig`]); geodesic
distances and lengths are always computed on the WGS84 ellipsoid.

## Resolution and routing

A query location is a [`RouteEndpoint`]: either a geographic coordinate or a
PAC junction code.  Coordinates snap to the geodesically nearer endpoint of
the edge with the closest endpoint vertex; PAC codes resolve through the
first edge referencing them.  The edge set is then scoped to the circuit the
start location resolved into, a fresh [`FeederGraph`] is built for the
request, and a priority-queue search finds the minimum-resistance node
sequence, which is turned back into an ordered sequence of edge records.

When the destination is topologically disconnected from the start within the
scoped circuit, the engine degrades gracefully: the returned [`Route`] ends
at the reachable junction geodesically nearest the destination and is marked
partial.  [`Route::layer_name`] reports the name such a route would be
persisted under (`rota_completa` or `rota_parcial`).

## Errors

All failures are deterministic functions of the input and surface immediately
as an [`Error`]: the validation kinds `InvalidReferenceSystem`,
`MissingColumns` and `InvalidEdgeKind`, the resolution kinds
`NoEdgesAvailable` and `NodeNotFound`, and `NoPathPossible` when the search
exhausts with no usable result.  A partial route is not an error.
*/

mod config;
pub use config::FeederGraphConfig;

mod edge;
pub use edge::{normalize_layer, FeederEdge};

mod edge_kind;
pub use edge_kind::EdgeKind;

mod engine;
pub use engine::{resolve_path, RouteEndpoint, SEGMENT_LAYER, SWITCH_LAYER};

mod error;
pub use error::Error;

mod geometry;

mod graph;
pub use graph::FeederGraph;

mod layer;
pub use layer::{Field, LayerRow, LayerTable};

mod resistance;
pub use resistance::attach_resistance;

mod resolve;
pub use resolve::{resolve_pac, resolve_point, ResolvedNode};

mod route;
pub use route::Route;
