//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors raised by the tool registry.
///
/// Only contract violations end up here. Upstream weather failures are
/// turned into user-facing text by the handlers and never become a
/// `ToolError`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The arguments do not match the tool's input schema.
    #[error("Invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// The tool returned a value that could not be encoded.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::NotFound(_) | ToolError::InvalidArguments { .. } => {
                McpError::invalid_params(e.to_string(), None)
            }
            ToolError::Internal(_) => McpError::internal_error(e.to_string(), None),
        }
    }
}
