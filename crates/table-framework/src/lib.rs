//! # Table Framework
//!
//! This crate provides the building blocks for turning typed records into tables.
//! It separates *what* a table contains from *how* it is shown:
//!
//! 1. **Entity Layer** ([`TableEntity`]) - how one record becomes one keyed row
//! 2. **Structure Layer** ([`Table`], [`HeaderRow`], [`Row`], [`Cell`]) - plain content, no styling
//! 3. **Presentation Layer** ([`TableWidget`]) - `ratatui` table widget, drawn to a frame or off-screen
//!
//! You write the mapping **once** in the entity trait; [`TableView`] does the
//! iteration, keying and logging for any record type.
//!
//! ## Example
//!
//! ```rust
//! use table_framework::{Cell, TableEntity, TableView, TableWidget};
//!
//! struct Part { sku: u32, name: String }
//!
//! impl TableEntity<2> for Part {
//!     type Key = u32;
//!     fn columns() -> [&'static str; 2] { ["SKU", "Name"] }
//!     fn key(&self) -> u32 { self.sku }
//!     fn cells(&self) -> [Cell; 2] { [Cell::new(self.sku), Cell::new(self.name.as_str())] }
//! }
//!
//! let parts = vec![Part { sku: 7, name: "bolt".into() }];
//! let table = TableView::<Part, 2>::new().render(&parts);
//! assert_eq!(table.row_count(), 2);
//!
//! let lines = TableWidget::new(&table).lines();
//! assert_eq!(lines, ["SKU  Name", "  7  bolt"]);
//! ```
//!
//! ## Type Safety
//!
//! - **Fixed arity**: the column count is a const generic, so entity-backed rows
//!   always match their header and rendering cannot fail
//! - **Typed cells**: cells remember whether they hold a number or text
//! - **Checked dynamic path**: hand-built rows go through [`Table::push_row`],
//!   which rejects arity mismatches with [`TableError::ColumnCount`]
//!
//! ## Concurrency Model
//!
//! Everything here is synchronous plain data. A [`TableView`] holds no state, so
//! `render` is reentrant and rendering the same input twice yields equal tables.

pub mod cell;
pub mod entity;
pub mod error;
pub mod render;
pub mod table;
pub mod tracing;
pub mod view;

// Re-export core types for convenience
pub use cell::{Cell, CellValue};
pub use entity::TableEntity;
pub use error::TableError;
pub use render::{buffer_lines, TableWidget};
pub use table::{HeaderRow, Row, RowKey, Table};
pub use view::TableView;
