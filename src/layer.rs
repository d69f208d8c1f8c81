// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! An in-memory model of the geometry-tagged tabular layers the engine
//! receives from its layer-loading collaborator.
//!
//! A [`LayerTable`] corresponds to one layer of the source geodatabase: it
//! knows its reference system, the set of columns it was loaded with, and its
//! rows.  Attribute values are loosely typed [`Field`]s with text/number
//! coercions, because the source format stores codes that are numeric in some
//! distributions and textual in others.

use geo_types::Geometry;
use std::collections::HashMap;

/// A single attribute value of a layer row.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Text(String),
    Real(f64),
}

impl Field {
    /// The value as text.  Numbers are formatted with their shortest
    /// round-trippable representation.
    pub fn as_text(&self) -> String {
        match self {
            Field::Text(value) => value.clone(),
            Field::Real(value) => value.to_string(),
        }
    }

    /// The value as a real number.  Text is parsed; unparseable text yields
    /// `None`.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Field::Real(value) => Some(*value),
            Field::Text(value) => value.trim().parse().ok(),
        }
    }
}

/// One feature of a layer: an attribute map plus its geometry.
#[derive(Clone, Debug)]
pub struct LayerRow {
    attributes: HashMap<String, Field>,
    geometry: Geometry<f64>,
}

impl LayerRow {
    /// Creates a row with the given geometry and no attributes.
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self {
            attributes: HashMap::new(),
            geometry,
        }
    }

    /// Adds a text attribute.
    pub fn with_text(mut self, column: &str, value: impl Into<String>) -> Self {
        self.attributes
            .insert(column.to_owned(), Field::Text(value.into()));
        self
    }

    /// Adds a numeric attribute.
    pub fn with_real(mut self, column: &str, value: f64) -> Self {
        self.attributes
            .insert(column.to_owned(), Field::Real(value));
        self
    }

    /// Returns the raw attribute value for the given column, if present.
    pub fn field(&self, column: &str) -> Option<&Field> {
        self.attributes.get(column)
    }

    /// Returns the attribute coerced to text.
    pub fn text(&self, column: &str) -> Option<String> {
        self.field(column).map(Field::as_text)
    }

    /// Returns the attribute coerced to a real number.
    pub fn real(&self, column: &str) -> Option<f64> {
        self.field(column).and_then(Field::as_real)
    }

    /// The row's geometry.
    pub fn geometry(&self) -> &Geometry<f64> {
        &self.geometry
    }
}

/// A geometry-tagged tabular layer in a fixed geographic reference system.
#[derive(Clone, Debug)]
pub struct LayerTable {
    crs: String,
    columns: Vec<String>,
    rows: Vec<LayerRow>,
}

impl LayerTable {
    /// Creates an empty table with the given reference system and columns.
    pub fn new(crs: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            crs: crs.into(),
            columns: columns.iter().map(|c| (*c).to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: LayerRow) {
        self.rows.push(row);
    }

    /// Authority code of the table's reference system.
    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// Returns the required columns the table does not declare, sorted.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = required
            .iter()
            .filter(|column| !self.columns.iter().any(|c| c == *column))
            .map(|column| (*column).to_owned())
            .collect();
        missing.sort();
        missing
    }

    /// The table's rows, in load order.
    pub fn rows(&self) -> &[LayerRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, LineString};

    #[test]
    fn test_field_coercions() {
        assert_eq!(Field::Text("abc".to_owned()).as_text(), "abc");
        assert_eq!(Field::Real(2.5).as_text(), "2.5");
        assert_eq!(Field::Real(0.172).as_real(), Some(0.172));
        assert_eq!(Field::Text(" 0.172 ".to_owned()).as_real(), Some(0.172));
        assert_eq!(Field::Text("CA-50".to_owned()).as_real(), None);
    }

    #[test]
    fn test_missing_columns() {
        let table = LayerTable::new("EPSG:4674", &["COD_ID", "CTMT", "PAC_1"]);
        assert!(table
            .missing_columns(&["COD_ID", "CTMT", "PAC_1"])
            .is_empty());
        assert_eq!(
            table.missing_columns(&["PAC_2", "COD_ID", "COMP"]),
            vec!["COMP".to_owned(), "PAC_2".to_owned()]
        );
    }

    #[test]
    fn test_row_access() {
        let mut table = LayerTable::new("EPSG:4674", &["COD_ID", "COMP"]);
        table.push(
            LayerRow::new(Geometry::LineString(LineString::from(vec![
                (0.0, 0.0),
                (1.0, 1.0),
            ])))
            .with_text("COD_ID", "S1")
            .with_real("COMP", 1500.0),
        );

        let row = &table.rows()[0];
        assert_eq!(row.text("COD_ID"), Some("S1".to_owned()));
        assert_eq!(row.real("COMP"), Some(1500.0));
        assert_eq!(row.real("TIP_CND"), None);
    }
}
