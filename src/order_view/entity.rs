//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`TableEntity`] trait implementation
//! that enables [`Order`] to be rendered by the generic [`table_framework::TableView`].

use super::{ORDER_COLUMNS, ORDER_COLUMN_COUNT};
use crate::model::{Order, OrderId};
use table_framework::{Cell, TableEntity};

impl TableEntity<ORDER_COLUMN_COUNT> for Order {
    type Key = OrderId;

    fn columns() -> [&'static str; ORDER_COLUMN_COUNT] {
        ORDER_COLUMNS
    }

    fn key(&self) -> OrderId {
        self.id
    }

    /// Field order: `id, customer, date, amount, status`. Values are not reformatted.
    fn cells(&self) -> [Cell; ORDER_COLUMN_COUNT] {
        [
            Cell::new(self.id.0),
            Cell::new(self.customer.as_str()),
            Cell::new(self.date.as_str()),
            Cell::new(self.amount),
            Cell::new(self.status.as_str()),
        ]
    }
}
