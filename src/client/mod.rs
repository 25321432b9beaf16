//! Client side of the MCP session.
//!
//! `ClientSession` opens a session (spawning the server as a child process
//! or over any rmcp transport), lists tools and calls them by name.
//! `ToolReply` pulls the text entries and structured payload out of the
//! result envelope.

mod error;
mod session;

pub use error::ClientError;
pub use session::{ClientSession, ToolReply, parse_arguments};
