//! Forecast tool definition.
//!
//! Two sequential NWS requests: `/points/{lat},{lon}` yields the forecast URL
//! for the grid cell, which is then fetched and its first periods formatted.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::SEPARATOR;
use crate::core::config::{Config, WeatherConfig};
use crate::domains::tools::ToolRegistry;
use crate::domains::weather::{ACCEPT_GEO_JSON, Fetch, Node, fetch_json};

/// Answer when the points lookup fails.
pub const POINTS_FAILED_MESSAGE: &str = "Unable to fetch forecast data for this location.";

/// Answer when the forecast itself fails.
pub const FORECAST_FAILED_MESSAGE: &str = "Unable to fetch detailed forecast.";

/// Parameters for the forecast tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetForecastParams {
    /// Latitude of the location.
    #[schemars(description = "Latitude of the location")]
    pub latitude: f64,

    /// Longitude of the location.
    #[schemars(description = "Longitude of the location")]
    pub longitude: f64,
}

/// Forecast tool - NWS forecast for a coordinate.
pub struct GetForecastTool;

impl GetForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_forecast";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather forecast for a location.";

    /// Points URL for a coordinate.
    pub fn points_url(config: &WeatherConfig, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{},{}", config.nws_api_base, latitude, longitude)
    }

    #[instrument(skip_all, fields(latitude = params.latitude, longitude = params.longitude))]
    pub async fn execute(
        params: &GetForecastParams,
        fetcher: &dyn Fetch,
        config: &WeatherConfig,
    ) -> String {
        let points_url = Self::points_url(config, params.latitude, params.longitude);
        let Some(points) = fetch_json(fetcher, &points_url, ACCEPT_GEO_JSON).await else {
            return POINTS_FAILED_MESSAGE.to_string();
        };

        let Some(forecast_url) = Node::from(&points)
            .path(&["properties", "forecast"])
            .as_str()
        else {
            warn!("Points response has no forecast URL");
            return POINTS_FAILED_MESSAGE.to_string();
        };

        let Some(forecast) = fetch_json(fetcher, forecast_url, ACCEPT_GEO_JSON).await else {
            return FORECAST_FAILED_MESSAGE.to_string();
        };

        Self::format_response(&forecast, config.forecast_periods)
    }

    /// Format the first `limit` periods of a forecast document.
    pub fn format_response(forecast: &Value, limit: usize) -> String {
        let periods = match Node::from(forecast).path(&["properties", "periods"]) {
            Node::Sequence(periods) => periods,
            _ => {
                warn!("Forecast response has no periods list");
                return FORECAST_FAILED_MESSAGE.to_string();
            }
        };

        info!("Formatting {} of {} period(s)", periods.len().min(limit), periods.len());
        periods
            .iter()
            .take(limit)
            .map(|period| format_period(Node::from(period)))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Register this tool in the registry.
    pub fn register(registry: &mut ToolRegistry, fetcher: Arc<dyn Fetch>, config: Arc<Config>) {
        registry.register(
            Self::NAME,
            Self::DESCRIPTION,
            move |params: GetForecastParams| {
                let fetcher = fetcher.clone();
                let config = config.clone();
                async move { Self::execute(&params, fetcher.as_ref(), &config.weather).await }
            },
        );
    }
}

fn format_period(period: Node<'_>) -> String {
    format!(
        "\n{}:\nTemperature: {}°{}\nWind: {} {}\nForecast: {}\n",
        period.text_or("name", "Unknown"),
        period.text_or("temperature", "Unknown"),
        period.text_or("temperatureUnit", ""),
        period.text_or("windSpeed", "Unknown"),
        period.text_or("windDirection", ""),
        period.text_or("detailedForecast", "No description available"),
    )
}
