//! HTTP fetcher for the weather APIs.
//!
//! [`Fetch`] is the seam between tool handlers and the network. The
//! production implementation is [`HttpFetcher`]; tests script responses.
//! Callers use [`fetch_json`], which collapses every failure into `None`:
//! a weather tool treats network, HTTP and parse failures alike as "source
//! unavailable". The cause is still logged and kept in [`FetchError`].

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::core::config::WeatherConfig;

/// `Accept` header for the NWS API.
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// `Accept` header for plain JSON endpoints (JMA).
pub const ACCEPT_JSON: &str = "application/json";

/// Why a fetch produced no data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not finish within the timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection, TLS or other transport failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("Invalid JSON body: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Something that can GET a JSON document.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url` with the given `Accept` header and parse the body as JSON.
    async fn get_json(&self, url: &str, accept: &str) -> Result<Value, FetchError>;
}

/// Fetch a JSON document, returning `None` on any failure.
pub async fn fetch_json(fetcher: &dyn Fetch, url: &str, accept: &str) -> Option<Value> {
    match fetcher.get_json(url, accept).await {
        Ok(document) => Some(document),
        Err(e) => {
            warn!(url, error = %e, "Weather source unavailable");
            None
        }
    }
}

/// [`Fetch`] implementation backed by `reqwest`.
///
/// A client is built per request and dropped when the request finishes,
/// whatever the outcome. Nothing is pooled across tool calls.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(
            config.user_agent.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(skip(self))]
    async fn get_json(&self, url: &str, accept: &str) -> Result<Value, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {e}")))?;

        let response = client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Response received: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
