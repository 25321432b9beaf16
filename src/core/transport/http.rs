//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests, so plain HTTP clients
//! (curl, browsers) can list and call tools without an MCP SDK.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::PROTOCOL_VERSION;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Application state shared across HTTP handlers. Read-only: each request
/// is answered on its own.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
}

impl AppState {
    pub fn new(server: McpServer) -> Self {
        Self { server }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for this transport.
    pub fn router(&self, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(AppState::new(server));

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "tools": state.server.registry().tool_names(),
        "protocol": "JSON-RPC 2.0",
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
pub async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request),
        "tools/list" => handle_tools_list(state, request),
        "tools/call" => handle_tools_call(state, request).await,

        // Notifications (no response needed for stateless HTTP)
        method if method.starts_with("notifications/") => {
            info!("Received notification: {}", request.method);
            JsonRpcResponse::success(request.id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let result = serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": state.server.instructions()
    });

    JsonRpcResponse::success(request.id, result)
}

fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let result = serde_json::json!({
        "tools": state.server.list_tools()
    });

    JsonRpcResponse::success(request.id, result)
}

async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };

    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => {
            return JsonRpcResponse::invalid_params(request.id, "Arguments must be an object");
        }
    };

    match state.server.call_tool_json(name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(McpServer::new(Config::default()))
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_then_list() {
        let state = state();

        let response = process_request(&state, request("initialize", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "weather-mcp-server");

        let response = process_request(&state, request("notifications/initialized", None)).await;
        assert_eq!(response.result, Some(Value::Null));
        assert!(response.error.is_none());

        let response = process_request(&state, request("tools/list", None)).await;
        let tools = response.result.unwrap()["tools"].clone();
        assert_eq!(tools.as_array().unwrap().len(), 5);
        assert_eq!(tools[0]["name"], "echo");
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn test_requests_do_not_depend_on_initialize() {
        let state = state();

        // One client initializes, another calls straight away.
        process_request(&state, request("initialize", None)).await;
        let response = process_request(
            &state,
            request("tools/call", Some(json!({"name": "echo", "arguments": {"text": "x"}}))),
        )
        .await;
        assert_eq!(response.result.unwrap()["content"][0]["text"], "x");

        let fresh = AppState::new(McpServer::new(Config::default()));
        let response = process_request(&fresh, request("tools/list", None)).await;
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_tools_call_add() {
        let response = process_request(
            &state(),
            request("tools/call", Some(json!({"name": "add", "arguments": {"a": 1, "b": 2}}))),
        )
        .await;

        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "3.0");
    }

    #[tokio::test]
    async fn test_tools_call_unknown() {
        let response = process_request(
            &state(),
            request("tools/call", Some(json!({"name": "nonexistent", "arguments": {}}))),
        )
        .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_tools_call_rejects_non_object_arguments() {
        let response = process_request(
            &state(),
            request("tools/call", Some(json!({"name": "echo", "arguments": [1]}))),
        )
        .await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_unknown_method_and_bad_version() {
        let response = process_request(&state(), request("resources/list", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);

        let mut bad = request("tools/list", None);
        bad.jsonrpc = "1.0".to_string();
        let response = process_request(&state(), bad).await;
        assert_eq!(response.error.unwrap().code, -32600);
    }
}
