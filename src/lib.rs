//! # Order Table
//!
//! > **A keyed, five-column table of customer orders.**
//!
//! This crate renders a sequence of orders (ID, customer, date, amount, status)
//! into the table primitives of the [`table_framework`] crate. There is no data
//! fetching and no interaction: the input is an immutable slice, the output is a
//! plain [`Table`](table_framework::Table) value.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: The [`Order`](model::Order) record and the fixed dataset
//!   returned by [`sample_orders`](model::sample_orders).
//!
//! ### 2. The View ([`order_view`])
//! - **Role**: Maps orders onto table rows. [`OrderTable`](order_view::OrderTable)
//!   takes the orders as a parameter; [`OrderTable::sample`](order_view::OrderTable::sample)
//!   is the parameterless entry point over the fixed dataset.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Infallible Rendering
//! `Order` implements [`TableEntity<5>`](table_framework::TableEntity), so every row is
//! exactly as wide as the header. Rendering returns a `Table`, not a `Result`.
//! The only fallible step is writing the laid-out text to a sink.
//!
//! ### 2. Row Identity
//! Each row is keyed by the order id. Repeated ids are logged at `warn` and still rendered.
//!
//! ### 3. Observability
//! Rendering emits `tracing` events; the binary installs the subscriber with
//! [`setup_tracing`](table_framework::tracing::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Print the sample table
//! cargo run
//!
//! # With render spans
//! RUST_LOG=debug cargo run
//! ```

pub mod model;
pub mod order_view;
