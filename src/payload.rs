//! Result payloads that can be rendered.
//!
//! A payload is either a single typed cell or an `ARRAY` of cells laid out
//! row-major over `fRows` × `fCols`. Field names follow the wire format.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// The type tag of a cell (`fType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum CellKind {
    Text,
    Json,
    Date,
    Number,
    Link,
    Array,
    Error,
    ConfirmWriteDataset,
    ConfirmWriteDatasetPro,
    /// Any tag this crate does not know; renders as nothing.
    #[default]
    #[serde(other)]
    Unknown,
}

/// How a DATE or NUMBER cell should be displayed (`fDisplayFormat`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// A datepicker pattern for dates, a legacy number pattern for numbers.
    #[serde(rename = "fPattern", default)]
    pub pattern: String,
    #[serde(rename = "fLocale", default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Overrides the text of a header cell (`fHeaders[]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderOverride {
    #[serde(rename = "fHeader", default)]
    pub header: String,
}

/// A result payload or one cell of an `ARRAY` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    #[serde(rename = "fType", default)]
    pub kind: CellKind,
    #[serde(rename = "fStr", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "fNum", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(rename = "fUri", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "fDisplayFormat", default, skip_serializing_if = "Option::is_none")]
    pub display_format: Option<DisplayFormat>,
    #[serde(rename = "fHeaders", default, skip_serializing_if = "Option::is_none")]
    pub header_overrides: Option<Vec<HeaderOverride>>,
    /// Whether this cell belongs to the header row.
    #[serde(rename = "fHeader", default)]
    pub is_header: bool,
    #[serde(rename = "fRows", default)]
    pub rows: usize,
    #[serde(rename = "fCols", default)]
    pub cols: usize,
    #[serde(rename = "fArray", default, skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<ResultPayload>,
}

impl ResultPayload {
    /// Decodes a payload from JSON.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A TEXT cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Text,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A NUMBER cell, optionally with a display format.
    pub fn number(number: f64, display_format: Option<DisplayFormat>) -> Self {
        Self {
            kind: CellKind::Number,
            number: Some(number),
            display_format,
            ..Self::default()
        }
    }

    /// A DATE cell holding a timestamp in seconds or milliseconds.
    pub fn date(timestamp: f64, display_format: Option<DisplayFormat>) -> Self {
        Self {
            kind: CellKind::Date,
            number: Some(timestamp),
            display_format,
            ..Self::default()
        }
    }

    /// A LINK cell.
    pub fn link(text: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Link,
            text: Some(text.into()),
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// An ARRAY payload over `cells` laid out row-major.
    pub fn array(rows: usize, cols: usize, cells: Vec<ResultPayload>) -> Self {
        Self {
            kind: CellKind::Array,
            rows,
            cols,
            cells,
            ..Self::default()
        }
    }

    /// Marks this cell as a header cell.
    pub fn header(mut self) -> Self {
        self.is_header = true;
        self
    }

    /// Returns the cell at `row`, `col` of an ARRAY payload.
    pub fn cell(&self, row: usize, col: usize) -> Option<&ResultPayload> {
        self.cells.get(self.cols * row + col)
    }
}

impl DisplayFormat {
    pub fn new(pattern: impl Into<String>, locale: Option<&str>) -> Self {
        Self {
            pattern: pattern.into(),
            locale: locale.map(str::to_string),
        }
    }
}
