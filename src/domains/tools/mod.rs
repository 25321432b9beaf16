//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Typed registration, listing and invocation
//! - `handlers.rs` - Handler return values and the MCP result envelope
//! - `router.rs` - Builds the registry with every tool
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct, `execute()`
//!    and `register()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Call its `register()` in `router.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::{BoxedHandler, IntoToolOutput, Structured, ToolOutput};
pub use registry::ToolRegistry;
pub use router::build_tool_registry;
