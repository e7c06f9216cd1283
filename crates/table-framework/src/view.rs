//! # Generic Table View
//!
//! [`TableView`] maps a borrowed slice of records onto a [`Table`]. It holds no
//! state between calls, so rendering is reentrant and the same input always
//! produces an equal table.

use crate::entity::TableEntity;
use crate::table::{HeaderRow, Row, RowKey, Table};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Renders records of type `T` into `N`-column tables.
#[derive(Debug)]
pub struct TableView<T, const N: usize> {
    _entity: PhantomData<fn(&T)>,
}

impl<T, const N: usize> TableView<T, N>
where
    T: TableEntity<N>,
{
    pub fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }

    /// Header derived from [`TableEntity::columns`].
    pub fn header() -> HeaderRow {
        HeaderRow::new(T::columns())
    }

    /// Emits one header row plus one row per record, in input order.
    ///
    /// Duplicate keys are logged and kept; they do not abort the render.
    #[tracing::instrument(skip_all, fields(entity_type = entity_type::<T>(), records = records.len()))]
    pub fn render(&self, records: &[T]) -> Table {
        let mut table = Table::new(Self::header());
        for record in records {
            let row = Row::new(RowKey::new(record.key()), record.cells());
            table.push_row_unchecked(row);
        }

        let duplicates = table.duplicate_keys();
        if !duplicates.is_empty() {
            let keys: Vec<&str> = duplicates.iter().map(|k| k.0.as_str()).collect();
            warn!(?keys, "Duplicate row keys");
        }

        debug!(rows = table.row_count(), "Rendered");
        table
    }
}

impl<T, const N: usize> Default for TableView<T, N>
where
    T: TableEntity<N>,
{
    fn default() -> Self {
        Self::new()
    }
}

// Just the type name (e.g., "Order" instead of "order_table::model::order::Order")
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
