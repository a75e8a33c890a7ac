//! Storage models and schema helpers for the Minoan catalog.
//!
//! This crate defines the product and order records shared by the storage
//! backend, the query service, and the MCP surface, along with the table
//! definitions and the sample rows used to seed an empty database.

pub mod models;
pub mod schema;
pub mod seed;

pub use models::*;
