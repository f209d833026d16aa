//! Token Metadata Client
//!
//! Fills in name and symbol for Solana mints that no price source could
//! identify. Never marks a token as found: metadata alone is not market data.

use std::sync::Arc;

use async_trait::async_trait;

use super::types::TokenMeta;
use crate::domain::{TokenMarketRecord, TokenPatch};
use crate::ports::http::JsonFetcher;
use crate::ports::market_source::{MarketSource, SourceError};

/// Solscan public API base URL
pub const SOLSCAN_API: &str = "https://public-api.solscan.io";

/// Metadata-only lookup source
#[derive(Clone)]
pub struct TokenMetadataSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl TokenMetadataSource {
    /// Create a source against the public Solscan API
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self::with_base_url(fetcher, SOLSCAN_API)
    }

    /// Create a source against a custom base URL
    pub fn with_base_url(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn meta_url(&self, mint: &str) -> String {
        format!("{}/token/meta?tokenAddress={}", self.base_url, mint)
    }

    /// Fetch raw metadata for a mint
    pub async fn get_token_meta(&self, mint: &str) -> Result<TokenMeta, SourceError> {
        let body = self.fetcher.get_json(&self.meta_url(mint)).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait]
impl MarketSource for TokenMetadataSource {
    fn name(&self) -> &'static str {
        "solscan-meta"
    }

    /// Runs whenever the token is still nameless, even if a price was found
    fn should_query(&self, record: &TokenMarketRecord) -> bool {
        !record.has_known_name()
    }

    async fn query(&self, address: &str) -> Result<Option<TokenPatch>, SourceError> {
        let meta = self.get_token_meta(address).await?;
        if !meta.is_known() {
            return Ok(None);
        }
        Ok(Some(TokenPatch::identity(meta.name, meta.symbol)))
    }
}
