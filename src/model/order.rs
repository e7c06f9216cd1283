//! Customer orders and the fixed sample dataset.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status labels seen in practice. The set is not enforced.
pub const KNOWN_STATUSES: [&str; 3] = ["Shipped", "Pending", "Delivered"];

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a customer order.
///
/// # Table Framework
/// This struct implements the [`TableEntity`](table_framework::TableEntity) trait,
/// allowing it to be rendered by a [`TableView`](table_framework::TableView).
///
/// See [`crate::order_view`] for the column mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    /// `YYYY-MM-DD`, kept as text.
    pub date: String,
    pub amount: f64,
    pub status: String,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, also used as the row key
    /// * `customer` - Customer display name
    /// * `date` - Order date as `YYYY-MM-DD`; not parsed
    /// * `amount` - Order amount, no currency unit
    /// * `status` - Free-text status label
    pub fn new(
        id: u32,
        customer: impl Into<String>,
        date: impl Into<String>,
        amount: f64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: OrderId(id),
            customer: customer.into(),
            date: date.into(),
            amount,
            status: status.into(),
        }
    }

    /// Whether `status` is one of [`KNOWN_STATUSES`].
    pub fn has_known_status(&self) -> bool {
        KNOWN_STATUSES.contains(&self.status.as_str())
    }
}

/// The fixed order dataset shown by [`OrderTable::sample`](crate::order_view::OrderTable::sample).
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(1, "John Doe", "2023-10-26", 100.0, "Shipped"),
        Order::new(2, "Jane Smith", "2023-10-25", 200.0, "Pending"),
        Order::new(3, "Peter Jones", "2023-10-24", 150.0, "Delivered"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let orders = sample_orders();
        let mut ids: Vec<u32> = orders.iter().map(|o| o.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn unknown_status_is_kept() {
        let order = Order::new(9, "Ann Lee", "2023-11-01", 12.5, "Returned");
        assert!(!order.has_known_status());
        assert_eq!(order.status, "Returned");
    }
}
