//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for
//! binaries built on this framework. Library code only emits events; it never
//! installs a subscriber on its own.
//!
//! ## What Gets Traced
//!
//! - **Renders**: one `render` span per [`TableView::render`](crate::TableView::render)
//!   call, carrying the entity type and record count
//! - **Row counts**: a `debug` event once the table is built
//! - **Key collisions**: a `warn` event listing duplicate row keys
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show render spans and row counts
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=table_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a render of three orders shows:
//!
//! ```text
//! DEBUG render{entity_type="Order" records=3}: Rendered rows=4
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
