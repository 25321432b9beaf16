//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the tool registry and every tool exposed to MCP clients
//! - **weather**: upstream fetching and document handling for weather tools

pub mod tools;
pub mod weather;
