//! Echo tool definition.
//!
//! Returns its input unchanged. Mostly useful to check that a session works.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::domains::tools::ToolRegistry;

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// Text to send back.
    #[schemars(description = "Text to return unchanged")]
    pub text: String,
}

/// Echo tool - returns the given text as is.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Return the given text unchanged.";

    pub fn execute(params: EchoParams) -> String {
        debug!("Echoing {} bytes", params.text.len());
        params.text
    }

    /// Register this tool in the registry.
    pub fn register(registry: &mut ToolRegistry) {
        registry.register(Self::NAME, Self::DESCRIPTION, |params: EchoParams| async move {
            Self::execute(params)
        });
    }
}
