//! Core storage and query services for the Minoan catalog.
//!
//! This crate owns the `SQLite` backing store (schema bootstrap, seeding, row
//! mapping) and the control plane that turns tool calls into queries and
//! uniform response envelopes.

pub mod control;
pub mod store;
