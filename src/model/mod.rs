//! Pure data structures rendered through [`TableEntity`](table_framework::TableEntity).

pub mod order;

pub use order::*;
