//! Tool Router - builds the registry with every tool this server exposes.
//!
//! Registration order is listing order. Adding a tool means adding its
//! definition under `definitions/` and one `register` call here.

use std::sync::Arc;

use crate::core::config::Config;
use crate::domains::weather::Fetch;

use super::definitions::{AddTool, EchoTool, GetAlertsTool, GetForecastTool, GetTokyoWeatherTool};
use super::registry::ToolRegistry;

/// Build the tool registry with all tools.
pub fn build_tool_registry(config: Arc<Config>, fetcher: Arc<dyn Fetch>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    EchoTool::register(&mut registry);
    AddTool::register(&mut registry);
    GetAlertsTool::register(&mut registry, fetcher.clone(), config.clone());
    GetTokyoWeatherTool::register(&mut registry, fetcher.clone(), config.clone());
    GetForecastTool::register(&mut registry, fetcher, config);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::weather::fetcher::testing::ScriptedFetcher;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn test_registry(fetcher: ScriptedFetcher) -> ToolRegistry {
        build_tool_registry(Arc::new(Config::default()), Arc::new(fetcher))
    }

    fn text_of(result: &rmcp::model::CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_build_registry() {
        let registry = test_registry(ScriptedFetcher::new());
        assert_eq!(
            registry.tool_names(),
            vec!["echo", "add", "get_alerts", "get_tokyo_weather", "get_forecast"]
        );
    }

    #[test]
    fn test_descriptors_have_schemas() {
        let registry = test_registry(ScriptedFetcher::new());
        for tool in registry.list_tools() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
        }

        let forecast = registry.get("get_forecast").unwrap();
        let required = forecast.input_schema.get("required").cloned();
        assert_eq!(required, Some(json!(["latitude", "longitude"])));
    }

    #[tokio::test]
    async fn test_invoke_echo_and_add() {
        let registry = test_registry(ScriptedFetcher::new());

        let result = registry
            .invoke("echo", json!({"text": "hello mcp"}).as_object().cloned())
            .await
            .unwrap();
        assert_eq!(text_of(&result), "hello mcp");

        let result = registry
            .invoke("add", json!({"a": 1, "b": 2}).as_object().cloned())
            .await
            .unwrap();
        assert_eq!(text_of(&result), "3.0");
    }

    #[tokio::test]
    async fn test_invoke_alerts_through_registry() {
        let fetcher = ScriptedFetcher::new().with(
            "https://api.weather.gov/alerts/active/area/ZZ",
            json!({"features": []}),
        );
        let registry = test_registry(fetcher);

        let result = registry
            .invoke("get_alerts", json!({"state": "ZZ"}).as_object().cloned())
            .await
            .unwrap();
        assert_eq!(text_of(&result), "No active alerts for this state.");
    }

    #[tokio::test]
    async fn test_tokyo_weather_takes_no_arguments() {
        let registry = test_registry(ScriptedFetcher::new());
        let result = registry.invoke("get_tokyo_weather", None).await.unwrap();
        assert_eq!(text_of(&result), "東京の天気情報を取得できませんでした。");
    }
}
