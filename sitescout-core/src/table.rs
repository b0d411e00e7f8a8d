//! Row-oriented tabular input with named columns.
//!
//! Batch evaluation and clustering both consume a [`Table`]: an ordered
//! sequence of rows mapping column names to numeric or textual cells. A
//! JSON array of objects deserialises into one directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single table cell: numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell.
    Number(f64),
    /// A textual cell.
    Text(String),
}

impl CellValue {
    /// Return the numeric value, if this cell is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Return the text, if this cell is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(value) => Some(value),
        }
    }
}

/// One table row: column name to cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    /// Build a row from column/cell pairs.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (String, CellValue)>,
    {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Return the raw cell for a column.
    pub fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Return a numeric cell value for a column.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.cell(column).and_then(CellValue::as_number)
    }

    /// Return a textual cell value for a column.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.cell(column).and_then(CellValue::as_text)
    }

    /// Whether the row carries a cell for `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }
}

/// An ordered sequence of rows with named columns.
///
/// # Examples
/// ```
/// use sitescout_core::Table;
///
/// let table: Table = serde_json::from_str(
///     r#"[{"location_name": "A", "monthly_rent": 8000}]"#,
/// )?;
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.missing_columns(&["location_name", "floor_area_sqm"]),
///            vec!["floor_area_sqm".to_owned()]);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from rows, preserving their order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Report which required columns are absent, in the required order.
    ///
    /// A column counts as missing when any row lacks it; an empty table
    /// has no missing columns (there is nothing to evaluate).
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|column| self.rows.iter().any(|row| !row.contains(column)))
            .map(|column| (*column).to_owned())
            .collect()
    }
}
