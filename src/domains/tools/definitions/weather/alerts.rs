//! Weather alerts tool definition.
//!
//! Lists the active National Weather Service alerts for a US state.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::SEPARATOR;
use crate::core::config::{Config, WeatherConfig};
use crate::domains::tools::ToolRegistry;
use crate::domains::weather::{ACCEPT_GEO_JSON, Fetch, Node, fetch_json};

/// Answer when the feed is unreachable or has no `features` list.
pub const NO_DATA_MESSAGE: &str = "Unable to fetch alerts or no alerts found.";

/// Answer when the feed has an empty `features` list.
pub const NO_ALERTS_MESSAGE: &str = "No active alerts for this state.";

/// Parameters for the alerts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAlertsParams {
    /// Two-letter US state code.
    #[schemars(description = "Two-letter US state code (e.g. CA, NY)")]
    pub state: String,
}

/// Alerts tool - active NWS alerts for a state.
pub struct GetAlertsTool;

impl GetAlertsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_alerts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather alerts for a US state.";

    /// Alerts URL for a state.
    pub fn alerts_url(config: &WeatherConfig, state: &str) -> String {
        format!("{}/alerts/active/area/{}", config.nws_api_base, state)
    }

    #[instrument(skip_all, fields(state = %params.state))]
    pub async fn execute(
        params: &GetAlertsParams,
        fetcher: &dyn Fetch,
        config: &WeatherConfig,
    ) -> String {
        let url = Self::alerts_url(config, &params.state);
        let Some(data) = fetch_json(fetcher, &url, ACCEPT_GEO_JSON).await else {
            return NO_DATA_MESSAGE.to_string();
        };
        Self::format_response(&data)
    }

    /// Turn an alerts feed into the tool's answer.
    pub fn format_response(data: &Value) -> String {
        let features = match Node::from(data).field("features") {
            Node::Sequence(features) => features,
            _ => return NO_DATA_MESSAGE.to_string(),
        };
        if features.is_empty() {
            return NO_ALERTS_MESSAGE.to_string();
        }

        info!("Formatting {} alert(s)", features.len());
        features
            .iter()
            .map(|feature| format_alert(Node::from(feature)))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Register this tool in the registry.
    pub fn register(registry: &mut ToolRegistry, fetcher: Arc<dyn Fetch>, config: Arc<Config>) {
        registry.register(
            Self::NAME,
            Self::DESCRIPTION,
            move |params: GetAlertsParams| {
                let fetcher = fetcher.clone();
                let config = config.clone();
                async move { Self::execute(&params, fetcher.as_ref(), &config.weather).await }
            },
        );
    }
}

/// Format one alert feature. Missing properties become sentinels.
fn format_alert(feature: Node<'_>) -> String {
    let props = feature.field("properties");
    format!(
        "\nEvent: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}\n",
        props.text_or("event", "Unknown"),
        props.text_or("areaDesc", "Unknown"),
        props.text_or("severity", "Unknown"),
        props.text_or("description", "No description available"),
        props.text_or("instruction", "No specific instructions provided"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::weather::fetcher::testing::ScriptedFetcher;
    use serde_json::json;

    const ZZ_URL: &str = "https://api.weather.gov/alerts/active/area/ZZ";

    fn params(state: &str) -> GetAlertsParams {
        GetAlertsParams {
            state: state.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_features() {
        let fetcher = ScriptedFetcher::new().with(ZZ_URL, json!({"features": []}));
        let text =
            GetAlertsTool::execute(&params("ZZ"), &fetcher, &WeatherConfig::default()).await;
        assert_eq!(text, NO_ALERTS_MESSAGE);
        assert_eq!(fetcher.requests(), vec![ZZ_URL]);
    }

    #[tokio::test]
    async fn test_no_data() {
        let fetcher = ScriptedFetcher::new();
        let text =
            GetAlertsTool::execute(&params("ZZ"), &fetcher, &WeatherConfig::default()).await;
        assert_eq!(text, NO_DATA_MESSAGE);
    }

    #[test]
    fn test_missing_or_malformed_features() {
        assert_eq!(GetAlertsTool::format_response(&json!({})), NO_DATA_MESSAGE);
        assert_eq!(
            GetAlertsTool::format_response(&json!({"features": {"a": 1}})),
            NO_DATA_MESSAGE
        );
        assert_eq!(GetAlertsTool::format_response(&json!([])), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_formats_alerts_with_separator() {
        let data = json!({"features": [
            {"properties": {
                "event": "Heat Advisory",
                "areaDesc": "Sacramento Valley",
                "severity": "Moderate",
                "description": "Hot.",
                "instruction": "Drink water."
            }},
            {"properties": {"event": "Wind Advisory"}}
        ]});

        let text = GetAlertsTool::format_response(&data);
        let expected = "\nEvent: Heat Advisory\nArea: Sacramento Valley\nSeverity: Moderate\n\
                        Description: Hot.\nInstructions: Drink water.\n\
                        \n---\n\
                        \nEvent: Wind Advisory\nArea: Unknown\nSeverity: Unknown\n\
                        Description: No description available\n\
                        Instructions: No specific instructions provided\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_feature_without_properties() {
        let text = GetAlertsTool::format_response(&json!({"features": ["junk"]}));
        assert!(text.contains("Event: Unknown"));
        assert!(text.contains("Instructions: No specific instructions provided"));
    }

    #[tokio::test]
    async fn test_same_input_same_output() {
        let fetcher = ScriptedFetcher::new().with(
            ZZ_URL,
            json!({"features": [{"properties": {"event": "Flood Watch"}}]}),
        );
        let config = WeatherConfig::default();
        let first = GetAlertsTool::execute(&params("ZZ"), &fetcher, &config).await;
        let second = GetAlertsTool::execute(&params("ZZ"), &fetcher, &config).await;
        assert_eq!(first, second);
    }
}
