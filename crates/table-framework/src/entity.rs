//! # TableEntity Trait
//!
//! The `TableEntity` trait defines the contract a record type must implement to be
//! rendered by the generic [`TableView`](crate::TableView). It names the columns,
//! the row key, and how one record turns into one row of cells.
//!
//! # Architecture Note
//! The column count is a const generic parameter (`N`). `columns()` and `cells()`
//! both return `[_; N]`, so a record type cannot produce a row that is wider or
//! narrower than its header. This is why [`TableView::render`](crate::TableView::render)
//! returns a plain [`Table`](crate::Table) instead of a `Result`.

use crate::cell::Cell;
use std::fmt::Display;

/// Trait that any record type must implement to be rendered by [`TableView`](crate::TableView).
pub trait TableEntity<const N: usize> {
    /// Identity of a record; becomes the [`RowKey`](crate::RowKey) of its row.
    type Key: Display;

    /// Column labels, in display order.
    fn columns() -> [&'static str; N];

    /// The record's row key.
    fn key(&self) -> Self::Key;

    /// The record's cells, in the same order as [`TableEntity::columns`].
    fn cells(&self) -> [Cell; N];
}
