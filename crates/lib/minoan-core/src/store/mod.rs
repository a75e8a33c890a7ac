//! Store interfaces and `SQLite` implementation.
//!
//! The store layer handles persistence of products and orders.

pub mod sqlite;

pub use sqlite::{BootstrapReport, SqliteCatalogStore, StoreError, StoreResult};
