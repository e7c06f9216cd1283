//! # Table Structure
//!
//! The structural primitives a view emits into: a [`Table`] container holding a
//! [`HeaderRow`] and a [`TableBody`] of keyed [`Row`]s.
//!
//! These types carry content only. Layout and styling belong to the
//! `ratatui` presentation in [`crate::render`].
//!
//! ## Row Identity
//!
//! Every [`Row`] carries a [`RowKey`]. Hosting layers that diff one render against
//! the previous one use the key to match rows up. Keys are expected to be unique,
//! but a collision is not an error: [`Table::duplicate_keys`] reports it and the
//! rows are kept as they are.

use crate::cell::Cell;
use crate::error::TableError;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Display};

/// Stable identity of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RowKey(pub String);

impl RowKey {
    pub fn new(key: impl Display) -> Self {
        Self(key.to_string())
    }
}

impl Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed column labels of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeaderRow {
    labels: Vec<String>,
}

impl HeaderRow {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }
}

/// A keyed data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    key: RowKey,
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(key: RowKey, cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            key,
            cells: cells.into_iter().collect(),
        }
    }

    pub fn key(&self) -> &RowKey {
        &self.key
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Display text of every cell, in column order.
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(Cell::text).collect()
    }
}

/// The data rows of a table, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct TableBody {
    rows: Vec<Row>,
}

impl TableBody {
    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A header plus its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    header: HeaderRow,
    body: TableBody,
}

impl Table {
    /// Creates a table with the given header and no data rows.
    pub fn new(header: HeaderRow) -> Self {
        Self {
            header,
            body: TableBody::default(),
        }
    }

    /// Appends a row after checking it against the header arity.
    pub fn push_row(&mut self, row: Row) -> Result<(), TableError> {
        let expected = self.header.len();
        let found = row.cells.len();
        if expected != found {
            return Err(TableError::ColumnCount { expected, found });
        }
        self.body.rows.push(row);
        Ok(())
    }

    /// Appends a row whose arity is already guaranteed by the caller's types.
    pub(crate) fn push_row_unchecked(&mut self, row: Row) {
        debug_assert_eq!(row.cells.len(), self.header.len());
        self.body.rows.push(row);
    }

    pub fn header(&self) -> &HeaderRow {
        &self.header
    }

    /// Data rows, excluding the header.
    pub fn rows(&self) -> &[Row] {
        self.body.rows()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Total rows including the header row.
    pub fn row_count(&self) -> usize {
        1 + self.body.len()
    }

    /// `true` when the table has no data rows. The header is always present.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Keys that appear on more than one row, in order of first repetition.
    pub fn duplicate_keys(&self) -> Vec<RowKey> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for row in self.rows() {
            if !seen.insert(&row.key) && reported.insert(&row.key) {
                duplicates.push(row.key.clone());
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderRow {
        HeaderRow::new(["Name", "Qty"])
    }

    #[test]
    fn push_row_rejects_wrong_arity() {
        let mut table = Table::new(header());
        let row = Row::new(RowKey::new(1), [Cell::new("widget")]);

        let err = table.push_row(row).unwrap_err();
        assert!(matches!(
            err,
            TableError::ColumnCount {
                expected: 2,
                found: 1
            }
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_keys_reported_once() {
        let mut table = Table::new(header());
        for key in [1, 2, 1, 1, 3, 2] {
            let row = Row::new(RowKey::new(key), [Cell::new("x"), Cell::new(1u32)]);
            table.push_row(row).unwrap();
        }

        assert_eq!(table.duplicate_keys(), vec![RowKey::new(1), RowKey::new(2)]);
        assert_eq!(table.row_count(), 7);
    }
}
