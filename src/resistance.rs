// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! Attaches per-edge electrical resistance derived from the auxiliary
//! segment-attribute and conductor-resistivity tables.

use crate::{EdgeKind, Error, FeederEdge, LayerTable};
use std::collections::HashMap;

/// Columns of the segment-attribute table used for the lookups.
const SEGMENT_COLUMNS: [&str; 3] = ["COD_ID", "COMP", "TIP_CND"];
/// Columns of the conductor-resistivity table used for the lookups.
const CONDUCTOR_COLUMNS: [&str; 2] = ["COD_ID", "R1"];

/// Computes and stores the resistance of every edge in place.
///
/// Segments resolve their conductor type (`TIP_CND`) and physical length in
/// meters (`COMP`) through `segment_attributes` by their own `COD_ID`, then
/// the conductor's per-kilometer resistance (`R1`) through `conductor_types`;
/// resistance is `(COMP / 1000) * R1`.  Lookups that miss propagate as NaN
/// and any NaN result is filled with 0.0, so unmatched segments route as
/// zero-impedance rather than failing.  Switches always get 0.0.
pub fn attach_resistance(
    edges: &mut [FeederEdge],
    segment_attributes: &LayerTable,
    conductor_types: &LayerTable,
) -> Result<(), Error> {
    let missing = segment_attributes.missing_columns(&SEGMENT_COLUMNS);
    if !missing.is_empty() {
        return Err(Error::missing_columns(format!(
            "Columns missing from the segment attribute table: {:?}",
            missing
        )));
    }
    let missing = conductor_types.missing_columns(&CONDUCTOR_COLUMNS);
    if !missing.is_empty() {
        return Err(Error::missing_columns(format!(
            "Columns missing from the conductor table: {:?}",
            missing
        )));
    }

    let mut comp_by_cod: HashMap<String, f64> = HashMap::new();
    let mut tip_by_cod: HashMap<String, String> = HashMap::new();
    for row in segment_attributes.rows() {
        let Some(cod_id) = row.text("COD_ID") else {
            continue;
        };
        if let Some(comp) = row.real("COMP") {
            comp_by_cod.insert(cod_id.clone(), comp);
        }
        if let Some(tip_cnd) = row.text("TIP_CND") {
            tip_by_cod.insert(cod_id, tip_cnd);
        }
    }

    let mut r1_by_tip: HashMap<String, f64> = HashMap::new();
    for row in conductor_types.rows() {
        if let (Some(cod_id), Some(r1)) = (row.text("COD_ID"), row.real("R1")) {
            r1_by_tip.insert(cod_id, r1);
        }
    }

    for edge in edges.iter_mut() {
        edge.resistance = match edge.kind {
            EdgeKind::Switch => 0.0,
            EdgeKind::Segment => {
                let comp = comp_by_cod.get(&edge.cod_id).copied().unwrap_or(f64::NAN);
                let r1 = tip_by_cod
                    .get(&edge.cod_id)
                    .and_then(|tip_cnd| r1_by_tip.get(tip_cnd))
                    .copied()
                    .unwrap_or(f64::NAN);
                let ohms = (comp / 1000.0) * r1;
                // Unresolved lookups collapse to zero impedance, not an error.
                if ohms.is_nan() {
                    0.0
                } else {
                    ohms
                }
            }
        };
    }

    Ok(())
}
