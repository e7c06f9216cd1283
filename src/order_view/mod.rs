//! Order table view.
//!
//! [`OrderTable`] turns a sequence of [`Order`]s into a five-column
//! [`Table`]: one header row, then one row per order in input order.
//! The table is keyed by order id so a hosting layer can match rows
//! across renders.

pub mod entity;

use crate::model::{sample_orders, Order};
use std::borrow::Cow;
use table_framework::{Table, TableView, TableWidget};
use tracing::debug;

pub const ORDER_COLUMN_COUNT: usize = 5;

/// Column labels, in display order.
pub const ORDER_COLUMNS: [&str; ORDER_COLUMN_COUNT] = ["ID", "Customer", "Date", "Amount", "Status"];

/// View over an immutable sequence of orders.
#[derive(Debug, Clone)]
pub struct OrderTable<'a> {
    orders: Cow<'a, [Order]>,
}

impl<'a> OrderTable<'a> {
    /// Creates a view over caller-supplied orders.
    pub fn new(orders: &'a [Order]) -> Self {
        Self {
            orders: Cow::Borrowed(orders),
        }
    }

    /// The orders this view renders, in input order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Renders the header and one row per order.
    ///
    /// Unknown status labels and repeated ids are logged, never rejected.
    pub fn render(&self) -> Table {
        for order in self.orders.iter().filter(|o| !o.has_known_status()) {
            debug!(order_id = %order.id, status = %order.status, "Unrecognized status label");
        }
        TableView::<Order, ORDER_COLUMN_COUNT>::new().render(&self.orders)
    }

    /// Renders and draws the table off-screen, one string per terminal row.
    pub fn render_lines(&self) -> Vec<String> {
        TableWidget::new(&self.render()).lines()
    }
}

impl OrderTable<'static> {
    /// The fixed dataset from [`sample_orders`].
    pub fn sample() -> Self {
        Self {
            orders: Cow::Owned(sample_orders()),
        }
    }
}
