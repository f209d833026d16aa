use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::coerce::lenient_f64;
use crate::domain::TokenPatch;
use crate::ports::http::JsonFetcher;
use crate::ports::market_source::{MarketSource, SourceError};

pub const JUPITER_PRICE_API: &str = "https://price.jup.ag/v4";

/// Solana price fallback: price only, keyed by mint address
#[derive(Clone)]
pub struct JupiterPriceSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl JupiterPriceSource {
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self::with_base_url(fetcher, JUPITER_PRICE_API)
    }

    pub fn with_base_url(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn price_url(&self, mint: &str) -> String {
        format!("{}/price?ids={}", self.base_url, mint)
    }
}

#[async_trait]
impl MarketSource for JupiterPriceSource {
    fn name(&self) -> &'static str {
        "jupiter-price"
    }

    async fn query(&self, address: &str) -> Result<Option<TokenPatch>, SourceError> {
        let body = self.fetcher.get_json(&self.price_url(address)).await?;
        let response: PriceResponse = serde_json::from_value(body)?;

        let price = response
            .data
            .unwrap_or_default()
            .remove(address)
            .flatten()
            .map(|p| p.price)
            .unwrap_or(0.0);

        // A zero price is not a listing
        if price > 0.0 {
            Ok(Some(TokenPatch {
                price_usd: Some(price),
                ..TokenPatch::found()
            }))
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    data: Option<HashMap<String, Option<PriceData>>>,
}

#[derive(Debug, Deserialize)]
struct PriceData {
    #[serde(default, deserialize_with = "lenient_f64")]
    price: f64,
}
