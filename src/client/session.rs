//! MCP client session.

use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, JsonObject, RawContent, Tool},
    service::RunningService,
    transport::{IntoTransport, TokioChildProcess},
};
use serde_json::Value;
use tokio::process::Command;
use tracing::{debug, info, instrument};

use super::error::ClientError;

/// An initialized session with an MCP server.
pub struct ClientSession {
    service: RunningService<RoleClient, ()>,
}

impl ClientSession {
    /// Spawn `command` and talk MCP over its stdin/stdout.
    pub async fn connect(command: &str, args: &[String]) -> Result<Self, ClientError> {
        let mut cmd = Command::new(command);
        cmd.args(args);

        info!("Spawning server: {} {:?}", command, args);
        let transport = TokioChildProcess::new(cmd)?;
        Self::start(transport).await
    }

    /// Run the `initialize` handshake over an arbitrary transport.
    pub async fn start<T, E, A>(transport: T) -> Result<Self, ClientError>
    where
        T: IntoTransport<RoleClient, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let service = ()
            .serve(transport)
            .await
            .map_err(|e| ClientError::Handshake(e.to_string()))?;

        if let Some(info) = service.peer_info() {
            info!(
                "Connected to {} v{}",
                info.server_info.name, info.server_info.version
            );
        }

        Ok(Self { service })
    }

    /// List every tool the server exposes.
    pub async fn list_tools(&self) -> Result<Vec<Tool>, ClientError> {
        self.service
            .list_all_tools()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))
    }

    /// Names of every tool the server exposes, in server order.
    pub async fn list_tool_names(&self) -> Result<Vec<String>, ClientError> {
        Ok(self
            .list_tools()
            .await?
            .into_iter()
            .map(|t| t.name.to_string())
            .collect())
    }

    /// Call a tool by name.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<ToolReply, ClientError> {
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments,
            })
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        debug!("Tool returned {} content item(s)", result.content.len());
        Ok(ToolReply::from(result))
    }

    /// Close the session and stop the transport.
    pub async fn close(self) -> Result<(), ClientError> {
        let reason = self
            .service
            .cancel()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        debug!("Session closed: {:?}", reason);
        Ok(())
    }
}

/// What a tool call returned, stripped of the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolReply {
    /// Text entries, in order. Non-text content is skipped.
    pub texts: Vec<String>,

    /// Structured payload, when the tool sent one.
    pub structured: Option<Value>,

    /// Whether the tool flagged its own result as an error.
    pub is_error: bool,
}

impl From<CallToolResult> for ToolReply {
    fn from(result: CallToolResult) -> Self {
        let texts = result
            .content
            .into_iter()
            .filter_map(|content| match content.raw {
                RawContent::Text(text) => Some(text.text),
                _ => None,
            })
            .collect();

        Self {
            texts,
            structured: result.structured_content,
            is_error: result.is_error.unwrap_or(false),
        }
    }
}

impl ToolReply {
    /// Human-readable rendering: the structured payload if any, else the text.
    pub fn display(&self) -> String {
        match &self.structured {
            Some(value) => value.to_string(),
            None => self.texts.join("\n"),
        }
    }
}

/// Parse tool arguments given as a JSON string.
///
/// An empty string means no arguments. Anything other than an object is
/// rejected.
pub fn parse_arguments(raw: &str) -> Result<Option<JsonObject>, ClientError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(other) => Err(ClientError::InvalidArguments(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(ClientError::InvalidArguments(e.to_string())),
    }
}
