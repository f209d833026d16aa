//! Market Source Port
//!
//! One upstream data source in a resolver fallback chain.

use async_trait::async_trait;
use thiserror::Error;

use super::http::FetchError;
use crate::domain::{TokenMarketRecord, TokenPatch};

/// Source failure. The resolver logs these and moves on to the next source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed payload: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Payload(e.to_string())
    }
}

/// A market data source queried by address
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this source still has something to contribute to `record`.
    ///
    /// Price sources only run until one of them finds the token.
    fn should_query(&self, record: &TokenMarketRecord) -> bool {
        !record.found
    }

    /// Query the source. `Ok(None)` means it answered but knows nothing useful.
    async fn query(&self, address: &str) -> Result<Option<TokenPatch>, SourceError>;
}
