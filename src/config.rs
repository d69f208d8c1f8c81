// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! This module contains the configuration options for the path-resolution
//! engine.

/// Configuration options for normalization and routing.
#[derive(Clone, Debug)]
pub struct FeederGraphConfig {
    /// Authority code of the geographic reference system the input layers are
    /// expected to be in.  Geodesic distances and lengths are always computed
    /// on the WGS84 ellipsoid, independently of this setting.
    pub expected_crs: String,

    /// Upper bound on the number of priority-queue pops a single search may
    /// perform.  `None` lets the search run until the destination is reached
    /// or the frontier is exhausted.  Hitting the bound behaves like frontier
    /// exhaustion, so the caller still gets a partial route.
    pub frontier_pop_limit: Option<usize>,
}

impl Default for FeederGraphConfig {
    fn default() -> Self {
        Self {
            expected_crs: "EPSG:4674".to_owned(),
            frontier_pop_limit: None,
        }
    }
}
