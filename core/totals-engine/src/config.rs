//! FILENAME: core/totals-engine/src/config.rs
//! PURPOSE: JSON-facing configuration and table data handed over by the host.
//! CONTEXT: Field names follow the host's camelCase payloads so that the
//! same documents can be passed through to the backend unchanged.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::UsedTotal;

// ============================================================================
// TABLE CONFIG
// ============================================================================

/// Totals-related settings of one table visualization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Whether the user may add and remove totals rows.
    pub totals_edit_allowed: bool,

    /// Totals currently attached to the table.
    pub totals: Vec<UsedTotal>,
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

// ============================================================================
// TABLE DATA
// ============================================================================

/// Kind of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Attribute label column. Query results tag these `attrLabel`.
    #[serde(alias = "attrLabel")]
    Attribute,
    Metric,
}

/// A JSON scalar that may arrive either as a string or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl Scalar {
    /// Numeric reading of the scalar. Text is trimmed and parsed;
    /// NaN and infinities are rejected.
    pub fn as_finite_number(&self) -> Option<f64> {
        let value = match self {
            Scalar::Text(s) => s.trim().parse::<f64>().ok()?,
            Scalar::Number(n) => *n,
        };
        value.is_finite().then_some(value)
    }
}

/// Attribute element of a row: its identifier and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeElement {
    #[serde(default)]
    pub id: Scalar,
    pub name: Scalar,
}

/// One cell of the raw query result.
/// Metric cells are plain scalars, attribute cells are `{ id, name }` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Value(Scalar),
    Element(AttributeElement),
}

impl RawCell {
    pub fn element(id: impl Into<String>, name: impl Into<String>) -> Self {
        RawCell::Element(AttributeElement {
            id: Scalar::Text(id.into()),
            name: Scalar::Text(name.into()),
        })
    }

    /// Numeric value of a metric cell; attribute elements have none.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawCell::Value(scalar) => scalar.as_finite_number(),
            RawCell::Element(_) => None,
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Value(Scalar::Text(value.to_string()))
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Value(Scalar::Text(value))
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Value(Scalar::Number(value))
    }
}

/// Header of a single table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeader {
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub title: String,
}

impl ColumnHeader {
    pub fn attribute(title: impl Into<String>) -> Self {
        let title = title.into();
        ColumnHeader { kind: ColumnKind::Attribute, id: Scalar::Text(title.clone()), title }
    }

    pub fn metric(title: impl Into<String>) -> Self {
        let title = title.into();
        ColumnHeader { kind: ColumnKind::Metric, id: Scalar::Text(title.clone()), title }
    }

    pub fn is_metric(&self) -> bool {
        self.kind == ColumnKind::Metric
    }
}

/// Raw result of the table query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    pub headers: Vec<ColumnHeader>,
    #[serde(default)]
    pub raw_data: Vec<Vec<Option<RawCell>>>,
}

impl TableData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Parsed numeric values of one metric column.
    /// Returns `None` for attribute columns and out-of-range indexes.
    /// Missing, unparsable and non-finite cells are skipped.
    pub fn metric_values(&self, column: usize) -> Option<Vec<f64>> {
        let header = self.headers.get(column)?;
        if !header.is_metric() {
            return None;
        }

        Some(
            self.raw_data
                .iter()
                .filter_map(|row| row.get(column)?.as_ref()?.as_number())
                .collect(),
        )
    }
}
