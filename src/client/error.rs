//! Client error types.

use thiserror::Error;

/// Errors raised by [`ClientSession`](super::ClientSession).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server process could not be started.
    #[error("Failed to start server process: {0}")]
    Spawn(#[from] std::io::Error),

    /// The `initialize` handshake failed.
    #[error("Session initialization failed: {0}")]
    Handshake(String),

    /// A request failed, including tool errors reported by the server.
    #[error("Request failed: {0}")]
    Request(String),

    /// Tool arguments were not a JSON object.
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}
