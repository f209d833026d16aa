//! HTTP Port
//!
//! The only way market sources reach the network. Production uses the
//! reqwest adapter; tests substitute canned responses.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from a single outbound GET
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid JSON body: {0}")]
    Decode(String),
}

/// Issues a GET and returns the decoded JSON body
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Fetch `url`; anything but a 200 with a JSON body is an error
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}
