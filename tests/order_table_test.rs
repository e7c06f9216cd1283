use order_table::model::{sample_orders, Order, OrderId};
use order_table::order_view::{OrderTable, ORDER_COLUMNS};
use table_framework::{CellValue, RowKey};

/// The fixed dataset renders as one header row plus three data rows.
#[test]
fn test_sample_table_has_header_and_three_rows() {
    let table = OrderTable::sample().render();

    assert_eq!(table.row_count(), 4);
    assert_eq!(table.rows().len(), 3);
    assert_eq!(
        table.header().labels(),
        ["ID", "Customer", "Date", "Amount", "Status"]
    );
    assert_eq!(table.header().labels(), ORDER_COLUMNS);
}

/// Each cell holds its field unchanged, in field order.
#[test]
fn test_rows_match_order_fields() {
    let orders = sample_orders();
    let table = OrderTable::new(&orders).render();

    assert_eq!(
        table.rows()[0].texts(),
        ["1", "John Doe", "2023-10-26", "100", "Shipped"]
    );

    let first = table.rows()[0].cells();
    assert_eq!(first[0].value(), &CellValue::Integer(1));
    assert_eq!(first[3].value(), &CellValue::Number(100.0));

    for (row, order) in table.rows().iter().zip(&orders) {
        let expected = [
            order.id.to_string(),
            order.customer.clone(),
            order.date.clone(),
            order.amount.to_string(),
            order.status.clone(),
        ];
        assert_eq!(row.texts(), expected);
    }
}

/// Row order follows input order; nothing is sorted.
#[test]
fn test_row_order_matches_input_order() {
    let mut orders = sample_orders();
    orders.reverse();

    let table = OrderTable::new(&orders).render();

    let keys: Vec<&RowKey> = table.rows().iter().map(|r| r.key()).collect();
    assert_eq!(
        keys,
        [&RowKey::new(3), &RowKey::new(2), &RowKey::new(1)]
    );
    assert_eq!(table.rows()[0].texts()[1], "Peter Jones");
}

#[test]
fn test_rows_are_keyed_by_order_id() {
    let orders = vec![
        Order::new(42, "Ann Lee", "2024-01-02", 9.99, "Pending"),
        Order::new(7, "Bo Chen", "2024-01-03", 18.0, "Shipped"),
    ];

    let table = OrderTable::new(&orders).render();

    assert_eq!(table.rows()[0].key(), &RowKey::new(OrderId(42)));
    assert_eq!(table.rows()[1].key(), &RowKey::new(OrderId(7)));
    assert_eq!(table.rows()[0].texts()[3], "9.99");
}

#[test]
fn test_empty_input_renders_header_only() {
    let table = OrderTable::new(&[]).render();

    assert!(table.is_empty());
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.header().labels(), ORDER_COLUMNS);
}

#[test]
fn test_render_is_idempotent() {
    let view = OrderTable::sample();

    let first = view.render();
    let second = view.render();

    assert_eq!(first, second);
    assert_eq!(view.orders(), sample_orders().as_slice());
}

/// Colliding ids are not an error; every record still gets a row.
#[test]
fn test_duplicate_ids_still_render() {
    let mut orders = sample_orders();
    orders.push(Order::new(2, "Jane Smith", "2023-10-27", 75.0, "Returned"));

    let table = OrderTable::new(&orders).render();

    assert_eq!(table.rows().len(), 4);
    assert_eq!(table.duplicate_keys(), vec![RowKey::new(2)]);
    assert_eq!(table.rows()[3].texts()[4], "Returned");
}
