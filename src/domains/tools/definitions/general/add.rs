//! Add tool definition.
//!
//! Adds two numbers. Integers are accepted and treated as floats.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolRegistry;

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First operand.
    pub a: f64,

    /// Second operand.
    pub b: f64,
}

/// Add tool - returns the sum of two numbers.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers and return the sum.";

    pub fn execute(params: AddParams) -> f64 {
        params.a + params.b
    }

    /// Register this tool in the registry.
    pub fn register(registry: &mut ToolRegistry) {
        registry.register(Self::NAME, Self::DESCRIPTION, |params: AddParams| async move {
            Self::execute(params)
        });
    }
}
