//! DexScreener Market Source
//!
//! Primary source for both chains. Looks up every pair referencing the token
//! and reports the most liquid one.

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{select_most_liquid, Pair, TokensResponse};
use crate::domain::{ChainKind, TokenPatch};
use crate::ports::http::JsonFetcher;
use crate::ports::market_source::{MarketSource, SourceError};

/// DexScreener public API base URL
pub const DEXSCREENER_API: &str = "https://api.dexscreener.com/latest/dex";

/// DEX aggregation source
#[derive(Clone)]
pub struct DexScreenerSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
    chain: ChainKind,
}

impl DexScreenerSource {
    /// Create a source for `chain` against the public API
    pub fn new(fetcher: Arc<dyn JsonFetcher>, chain: ChainKind) -> Self {
        Self::with_base_url(fetcher, chain, DEXSCREENER_API)
    }

    /// Create a source against a custom base URL
    pub fn with_base_url(fetcher: Arc<dyn JsonFetcher>, chain: ChainKind, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            chain,
        }
    }

    pub fn tokens_url(&self, address: &str) -> String {
        format!("{}/tokens/{}", self.base_url, address)
    }

    /// Convert the selected pair into a patch. FDV is only reported for Solana.
    fn pair_to_patch(&self, pair: Pair) -> TokenPatch {
        let (name, symbol) = pair
            .base_token
            .as_ref()
            .map(|t| (t.name.clone(), t.symbol.clone()))
            .unwrap_or_default();

        TokenPatch {
            found: true,
            name,
            symbol,
            price_usd: Some(pair.price_usd),
            volume_24h_usd: Some(pair.volume_h24()),
            liquidity_usd: Some(pair.liquidity_usd()),
            fully_diluted_valuation_usd: (self.chain == ChainKind::Solana).then_some(pair.fdv),
            market_cap_usd: Some(pair.market_cap),
            price_change_1h_pct: Some(pair.price_change_h1()),
            price_change_24h_pct: Some(pair.price_change_h24()),
        }
    }
}

#[async_trait]
impl MarketSource for DexScreenerSource {
    fn name(&self) -> &'static str {
        "dexscreener"
    }

    async fn query(&self, address: &str) -> Result<Option<TokenPatch>, SourceError> {
        let body = self.fetcher.get_json(&self.tokens_url(address)).await?;
        let response: TokensResponse = serde_json::from_value(body)?;

        let pairs = response.pairs.unwrap_or_default();
        tracing::debug!(address, pairs = pairs.len(), "DexScreener pairs");

        Ok(select_most_liquid(pairs).map(|pair| self.pair_to_patch(pair)))
    }
}
