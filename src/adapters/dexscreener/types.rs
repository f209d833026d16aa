//! DexScreener Types
//!
//! Response shape of `GET /tokens/{address}`. Every field is optional or
//! coerced: the API sends numbers as strings, drops fields for young pools
//! and returns `"pairs": null` for unknown tokens.

use serde::Deserialize;

use crate::domain::coerce::{lenient_f64, lenient_string};

/// Top-level response of the tokens endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokensResponse {
    #[serde(default)]
    pub pairs: Option<Vec<Pair>>,
}

/// A single DEX pool trading the token
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    #[serde(default, deserialize_with = "lenient_string")]
    pub chain_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dex_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub base_token: Option<PairToken>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_usd: f64,
    #[serde(default)]
    pub volume: Option<Windowed>,
    #[serde(default)]
    pub liquidity: Option<Liquidity>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fdv: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap: f64,
    #[serde(default)]
    pub price_change: Option<Windowed>,
}

impl Pair {
    /// Pool liquidity in USD, zero when unreported
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity.as_ref().map(|l| l.usd).unwrap_or(0.0)
    }

    pub fn volume_h24(&self) -> f64 {
        self.volume.as_ref().map(|v| v.h24).unwrap_or(0.0)
    }

    pub fn price_change_h1(&self) -> f64 {
        self.price_change.as_ref().map(|c| c.h1).unwrap_or(0.0)
    }

    pub fn price_change_h24(&self) -> f64 {
        self.price_change.as_ref().map(|c| c.h24).unwrap_or(0.0)
    }
}

/// Token on one side of a pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PairToken {
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
}

/// Values reported per time window
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Windowed {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub h1: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub h24: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Liquidity {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub usd: f64,
}

/// Pick the pair with the highest USD liquidity. Ties keep the first seen.
pub fn select_most_liquid(pairs: Vec<Pair>) -> Option<Pair> {
    pairs.into_iter().reduce(|best, candidate| {
        if candidate.liquidity_usd() > best.liquidity_usd() {
            candidate
        } else {
            best
        }
    })
}
