//! CoinGecko Token Price Source
//!
//! EVM fallback when DexScreener has no pairs. Uses the simple token price
//! endpoint on the Ethereum platform, keyed by lower-cased contract address.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::coerce::lenient_f64;
use crate::domain::TokenPatch;
use crate::ports::http::JsonFetcher;
use crate::ports::market_source::{MarketSource, SourceError};

/// CoinGecko public API base URL
pub const COINGECKO_API: &str = "https://api.coingecko.com/api/v3";

/// Price index source for EVM tokens
#[derive(Clone)]
pub struct CoinGeckoSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl CoinGeckoSource {
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self::with_base_url(fetcher, COINGECKO_API)
    }

    pub fn with_base_url(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the token price URL. `contract` must already be lower-cased.
    pub fn token_price_url(&self, contract: &str) -> String {
        format!(
            "{}/simple/token_price/ethereum?contract_addresses={}&vs_currencies=usd\
             &include_24hr_change=true&include_24hr_vol=true&include_market_cap=true",
            self.base_url, contract
        )
    }
}

#[async_trait]
impl MarketSource for CoinGeckoSource {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn query(&self, address: &str) -> Result<Option<TokenPatch>, SourceError> {
        let contract = address.to_lowercase();
        let body = self.fetcher.get_json(&self.token_price_url(&contract)).await?;
        let mut response: HashMap<String, Option<Map<String, Value>>> = serde_json::from_value(body)?;

        // An entry with no fields at all is the same as no entry
        let Some(entry) = response.remove(&contract).flatten().filter(|e| !e.is_empty()) else {
            return Ok(None);
        };
        let p: TokenPrice = serde_json::from_value(Value::Object(entry))?;

        Ok(Some(TokenPatch {
            price_usd: Some(p.usd),
            price_change_24h_pct: Some(p.usd_24h_change),
            volume_24h_usd: Some(p.usd_24h_vol),
            market_cap_usd: Some(p.usd_market_cap),
            ..TokenPatch::found()
        }))
    }
}

#[derive(Debug, Deserialize)]
struct TokenPrice {
    #[serde(default, deserialize_with = "lenient_f64")]
    usd: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    usd_24h_change: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    usd_24h_vol: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    usd_market_cap: f64,
}
