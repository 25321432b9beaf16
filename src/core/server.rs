//! MCP Server implementation.
//!
//! `McpServer` implements the rmcp `ServerHandler` trait and answers
//! `tools/list` and `tools/call` from the [`ToolRegistry`]. The registry is
//! built once and shared read-only by every session.
//!
//! **Adding a new tool does NOT require modifying this file**; see
//! `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_registry};
use crate::domains::weather::{Fetch, HttpFetcher};

/// Protocol version announced by the HTTP transport.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

const INSTRUCTIONS: &str = "Sample and weather tools. `echo` and `add` are plain utilities; \
     `get_alerts` and `get_forecast` query the US National Weather Service; \
     `get_tokyo_weather` reads the Japan Meteorological Agency forecast for Tokyo.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Every tool this server exposes.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server that reaches the weather APIs over HTTP.
    pub fn new(config: Config) -> Self {
        let fetcher = Arc::new(HttpFetcher::from_config(&config.weather));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a server with a custom fetcher for the weather tools.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetch>) -> Self {
        let config = Arc::new(config);
        let registry = Arc::new(build_tool_registry(config.clone(), fetcher));
        info!("Registered {} tools: {:?}", registry.len(), registry.tool_names());

        Self { config, registry }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Usage notes sent to clients during initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return the result envelope as JSON (for HTTP transport).
    pub async fn call_tool_json(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<serde_json::Value, ToolError> {
        let result = self.registry.invoke(name, arguments).await?;
        serde_json::to_value(result)
            .map_err(|e| ToolError::internal(format!("Failed to encode tool result: {e}")))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.registry
            .invoke(&request.name, request.arguments)
            .await
            .map_err(McpError::from)
    }
}
