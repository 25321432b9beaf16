//! End-to-end MCP session tests: an rmcp client talks to `McpServer` over an
//! in-memory duplex pipe.

use rmcp::ServiceExt;
use serde_json::json;
use weather_mcp_server::client::{ClientError, ClientSession};
use weather_mcp_server::{Config, McpServer};

async fn open_session() -> ClientSession {
    let (server_side, client_side) = tokio::io::duplex(64 * 1024);

    tokio::spawn(async move {
        let server = McpServer::new(Config::default());
        if let Ok(service) = server.serve(server_side).await {
            let _ = service.waiting().await;
        }
    });

    ClientSession::start(client_side)
        .await
        .expect("session should initialize")
}

#[tokio::test]
async fn test_list_tools_in_registration_order() {
    let session = open_session().await;

    let names = session.list_tool_names().await.unwrap();
    assert_eq!(
        names,
        vec!["echo", "add", "get_alerts", "get_tokyo_weather", "get_forecast"]
    );

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_echo_round_trip() {
    let session = open_session().await;

    for text in ["hello mcp", ""] {
        let reply = session
            .call_tool("echo", json!({"text": text}).as_object().cloned())
            .await
            .unwrap();
        assert_eq!(reply.texts, vec![text]);
        assert!(!reply.is_error);
    }

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_add() {
    let session = open_session().await;

    let reply = session
        .call_tool("add", json!({"a": 1, "b": 2}).as_object().cloned())
        .await
        .unwrap();
    assert_eq!(reply.texts, vec!["3.0"]);
    assert_eq!(reply.structured, None);

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_unknown_tool_is_an_error() {
    let session = open_session().await;

    let err = session
        .call_tool("nonexistent", json!({}).as_object().cloned())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
    assert!(err.to_string().contains("nonexistent"));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_invalid_arguments_are_an_error() {
    let session = open_session().await;

    let err = session
        .call_tool("add", json!({"a": 1}).as_object().cloned())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing field `b`"));

    let err = session
        .call_tool("echo", json!({"text": 5}).as_object().cloned())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));

    session.close().await.unwrap();
}
