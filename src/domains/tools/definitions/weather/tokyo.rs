//! Tokyo weather tool definition.
//!
//! Reads the Japan Meteorological Agency forecast for the Tokyo region and
//! reports today's weather for the Tokyo area, or the first area that has
//! any weather when Tokyo itself is missing from the feed.

use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::core::config::{Config, WeatherConfig};
use crate::domains::tools::ToolRegistry;
use crate::domains::weather::{ACCEPT_JSON, Fetch, fetch_json, resolve_tokyo_weather};

/// Answer when no weather could be found.
pub const UNAVAILABLE_MESSAGE: &str = "東京の天気情報を取得できませんでした。";

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTokyoWeatherParams {}

/// Tokyo weather tool - today's weather from JMA.
pub struct GetTokyoWeatherTool;

impl GetTokyoWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_tokyo_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather forecast for Tokyo.";

    #[instrument(skip_all)]
    pub async fn execute(fetcher: &dyn Fetch, config: &WeatherConfig) -> String {
        let Some(document) = fetch_json(fetcher, &config.jma_forecast_url, ACCEPT_JSON).await
        else {
            return UNAVAILABLE_MESSAGE.to_string();
        };

        match resolve_tokyo_weather(&document) {
            Some(weather) => format!("東京の今日の天気: {weather}"),
            None => {
                warn!("No weather entry found in JMA forecast");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    /// Register this tool in the registry.
    pub fn register(registry: &mut ToolRegistry, fetcher: Arc<dyn Fetch>, config: Arc<Config>) {
        registry.register(
            Self::NAME,
            Self::DESCRIPTION,
            move |_: GetTokyoWeatherParams| {
                let fetcher = fetcher.clone();
                let config = config.clone();
                async move { Self::execute(fetcher.as_ref(), &config.weather).await }
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::weather::fetcher::testing::ScriptedFetcher;
    use serde_json::json;

    fn jma_url() -> String {
        WeatherConfig::default().jma_forecast_url
    }

    #[tokio::test]
    async fn test_reports_tokyo_weather() {
        let fetcher = ScriptedFetcher::new().with(
            jma_url(),
            json!([{
                "publishingOffice": "気象庁",
                "timeSeries": [{
                    "timeDefines": ["2024-05-01T11:00:00+09:00"],
                    "areas": [
                        {"area": {"name": "伊豆諸島北部", "code": "130020"}, "weathers": ["雨"]},
                        {"area": {"name": "東京地方", "code": "130010"}, "weathers": ["晴れ　時々　くもり"]}
                    ]
                }]
            }]),
        );

        let text = GetTokyoWeatherTool::execute(&fetcher, &WeatherConfig::default()).await;
        assert_eq!(text, "東京の今日の天気: 晴れ　時々　くもり");
    }

    #[tokio::test]
    async fn test_unavailable_without_weathers() {
        let fetcher = ScriptedFetcher::new().with(
            jma_url(),
            json!([{"timeSeries": [{"areas": [{"area": {"name": "東京地方"}, "temps": ["20"]}]}]}]),
        );

        let text = GetTokyoWeatherTool::execute(&fetcher, &WeatherConfig::default()).await;
        assert_eq!(text, UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unavailable_on_fetch_failure() {
        let fetcher = ScriptedFetcher::new();
        let text = GetTokyoWeatherTool::execute(&fetcher, &WeatherConfig::default()).await;
        assert_eq!(text, UNAVAILABLE_MESSAGE);
        assert_eq!(fetcher.requests(), vec![jma_url()]);
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_jma_feed() {
        let config = WeatherConfig::default();
        let fetcher = crate::domains::weather::HttpFetcher::from_config(&config);
        let text = GetTokyoWeatherTool::execute(&fetcher, &config).await;
        assert!(text.starts_with("東京の今日の天気: "));
    }
}
