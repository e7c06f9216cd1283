//! Prints the sample order table to stdout.

use order_table::order_view::OrderTable;
use std::io;
use table_framework::tracing::setup_tracing;
use table_framework::{TableError, TableWidget};
use tracing::info;

fn main() -> Result<(), TableError> {
    setup_tracing();

    let view = OrderTable::sample();
    info!(orders = view.orders().len(), "Rendering order table");

    let table = view.render();
    TableWidget::new(&table).write_io(io::stdout().lock())?;

    info!(rows = table.row_count(), "Done");
    Ok(())
}
