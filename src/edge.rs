// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! Normalization of the raw feeder layers into uniform edge records.

use crate::{EdgeKind, Error, FeederGraphConfig, LayerTable};
use geo_types::Geometry;

/// Columns every routable layer must declare, besides its geometry.
const REQUIRED_COLUMNS: [&str; 4] = ["COD_ID", "CTMT", "PAC_1", "PAC_2"];

/// A cable segment or switching device between two junctions of a feeder.
#[derive(Clone, Debug)]
pub struct FeederEdge {
    /// Unique code of the underlying physical asset.
    pub cod_id: String,
    /// Code of the feeder circuit the edge belongs to.
    pub ctmt: String,
    /// PAC codes of the two junctions the edge connects.
    pub connection: (String, String),
    /// Whether the edge is a segment or a switch.
    pub kind: EdgeKind,
    /// The edge's line geometry in the working reference system.
    pub geometry: Geometry<f64>,
    /// Electrical resistance in ohms.  Zero until
    /// [`attach_resistance`][crate::attach_resistance] runs; always zero for
    /// switches.
    pub resistance: f64,
}

impl FeederEdge {
    /// Returns true if the given PAC code is one of the edge's endpoints.
    pub fn touches(&self, pac: &str) -> bool {
        self.connection.0 == pac || self.connection.1 == pac
    }
}

/// Converts one raw layer into uniform [`FeederEdge`] records.
///
/// The layer must be in the configured reference system and declare the
/// `COD_ID`, `CTMT`, `PAC_1` and `PAC_2` columns.  `layer_name` declares
/// which of the two routable layers this is and becomes the edge kind.
pub fn normalize_layer(
    layer: &LayerTable,
    layer_name: &str,
    config: &FeederGraphConfig,
) -> Result<Vec<FeederEdge>, Error> {
    if layer.crs() != config.expected_crs {
        return Err(Error::invalid_reference_system(format!(
            "Invalid reference system: {}. Expected {}.",
            layer.crs(),
            config.expected_crs
        )));
    }

    let missing = layer.missing_columns(&REQUIRED_COLUMNS);
    if !missing.is_empty() {
        return Err(Error::missing_columns(format!(
            "Columns missing for normalization: {:?}",
            missing
        )));
    }

    let kind = EdgeKind::from_layer(layer_name)?;

    Ok(layer
        .rows()
        .iter()
        .map(|row| FeederEdge {
            cod_id: row.text("COD_ID").unwrap_or_default(),
            ctmt: row.text("CTMT").unwrap_or_default(),
            connection: (
                row.text("PAC_1").unwrap_or_default(),
                row.text("PAC_2").unwrap_or_default(),
            ),
            kind,
            geometry: row.geometry().clone(),
            resistance: 0.0,
        })
        .collect())
}
