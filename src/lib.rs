//! Weather MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing a small set of tools:
//! `echo` and `add`, plus weather tools backed by the US National Weather
//! Service and the Japan Meteorological Agency.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the typed tool registry and every tool definition
//!   - **weather**: upstream fetching and defensive document traversal
//! - **client**: a session wrapper for calling the server from Rust
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     let result = server.registry().invoke("add", None).await;
//!     assert!(result.is_err()); // `a` and `b` are required
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
