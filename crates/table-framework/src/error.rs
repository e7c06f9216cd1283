//! # Framework Errors
//!
//! This module defines the error type shared by the table primitives and the
//! presenters. Building a table from a [`TableEntity`](crate::TableEntity) never
//! fails; errors only show up on the dynamic paths (pushing hand-built rows) and
//! when writing a drawn table out to a sink.

/// Errors that can occur while building or presenting a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A row's arity does not match the header.
    #[error("Row has {found} cells, table has {expected} columns")]
    ColumnCount { expected: usize, found: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
