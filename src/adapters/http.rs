//! Reqwest JSON Fetcher
//!
//! Production implementation of the `JsonFetcher` port. One client is shared
//! by every market source; each request is bounded by the client timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::ports::http::{FetchError, JsonFetcher};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("token-scout/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// `JsonFetcher` backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    config: HttpConfig,
    http: Client,
}

impl ReqwestFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(HttpConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: HttpConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

fn map_reqwest_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else if e.is_decode() {
        FetchError::Decode(e.to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[async_trait]
impl JsonFetcher for ReqwestFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<Value>().await.map_err(|e| map_reqwest_error(url, e))
    }
}
