//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream weather API configuration.
    pub weather: WeatherConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the weather tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// `User-Agent` sent with every request. NWS rejects anonymous clients.
    pub user_agent: String,

    /// Base URL of the National Weather Service API.
    pub nws_api_base: String,

    /// JMA regional forecast document used by the Tokyo tool.
    pub jma_forecast_url: String,

    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,

    /// Number of forecast periods included in a forecast answer.
    pub forecast_periods: usize,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            user_agent: "weather-app/1.0".to_string(),
            nws_api_base: "https://api.weather.gov".to_string(),
            jma_forecast_url: "https://www.jma.go.jp/bosai/forecast/data/forecast/130000.json"
                .to_string(),
            request_timeout_secs: 30,
            forecast_periods: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "weather-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_NWS_API_BASE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.weather.apply_env();

        config
    }
}

impl LoggingConfig {
    /// Read the log level on its own, so logging can be set up before the
    /// rest of the configuration is loaded and reports what it overrides.
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl WeatherConfig {
    fn apply_env(&mut self) {
        if let Ok(user_agent) = std::env::var("MCP_WEATHER_USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Ok(base) = std::env::var("MCP_NWS_API_BASE") {
            self.nws_api_base = base.trim_end_matches('/').to_string();
            info!("NWS API base set to {}", self.nws_api_base);
        }

        if let Ok(url) = std::env::var("MCP_JMA_FORECAST_URL") {
            self.jma_forecast_url = url;
            info!("JMA forecast URL set to {}", self.jma_forecast_url);
        }

        if let Ok(timeout) = std::env::var("MCP_WEATHER_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_WEATHER_TIMEOUT_SECS={:?}, using {}s",
                    timeout, self.request_timeout_secs
                ),
            }
        }
    }
}
