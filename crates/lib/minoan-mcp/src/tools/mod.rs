//! MCP tool modules.
//!
//! Tools are grouped by domain: catalog browsing and order placement.

pub mod catalog;
pub mod orders;
