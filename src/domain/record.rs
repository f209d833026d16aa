//! Token Market Record
//!
//! The normalized result of resolving one address, and the partial patches
//! individual sources contribute to it.

use serde::Serialize;

/// Name reported when no source could identify the token
pub const UNKNOWN_TOKEN_NAME: &str = "Unknown Token";

/// Symbol reported when no source could identify the token
pub const UNKNOWN_TOKEN_SYMBOL: &str = "UNKNOWN";

/// Market snapshot for a single token, built fresh for every lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMarketRecord {
    /// Whether any source returned usable market data
    pub found: bool,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub volume_24h_usd: f64,
    pub liquidity_usd: f64,
    pub fully_diluted_valuation_usd: f64,
    pub market_cap_usd: f64,
    pub price_change_1h_pct: f64,
    pub price_change_24h_pct: f64,
}

impl Default for TokenMarketRecord {
    fn default() -> Self {
        Self {
            found: false,
            name: UNKNOWN_TOKEN_NAME.to_string(),
            symbol: UNKNOWN_TOKEN_SYMBOL.to_string(),
            price_usd: 0.0,
            volume_24h_usd: 0.0,
            liquidity_usd: 0.0,
            fully_diluted_valuation_usd: 0.0,
            market_cap_usd: 0.0,
            price_change_1h_pct: 0.0,
            price_change_24h_pct: 0.0,
        }
    }
}

impl TokenMarketRecord {
    /// True once some source has supplied a real name
    pub fn has_known_name(&self) -> bool {
        self.name != UNKNOWN_TOKEN_NAME
    }

    /// Merge a source's patch. Present fields overwrite, `found` never reverts.
    pub fn apply(&mut self, patch: TokenPatch) {
        self.found |= patch.found;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(symbol) = patch.symbol {
            self.symbol = symbol;
        }

        let numeric = [
            (&mut self.price_usd, patch.price_usd),
            (&mut self.volume_24h_usd, patch.volume_24h_usd),
            (&mut self.liquidity_usd, patch.liquidity_usd),
            (&mut self.fully_diluted_valuation_usd, patch.fully_diluted_valuation_usd),
            (&mut self.market_cap_usd, patch.market_cap_usd),
            (&mut self.price_change_1h_pct, patch.price_change_1h_pct),
            (&mut self.price_change_24h_pct, patch.price_change_24h_pct),
        ];
        for (field, value) in numeric {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// Partial record produced by a single market source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenPatch {
    pub found: bool,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub price_usd: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    pub liquidity_usd: Option<f64>,
    pub fully_diluted_valuation_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub price_change_1h_pct: Option<f64>,
    pub price_change_24h_pct: Option<f64>,
}

impl TokenPatch {
    /// Patch that marks the token as found
    pub fn found() -> Self {
        Self { found: true, ..Default::default() }
    }

    /// Metadata-only patch, does not mark the token as found
    pub fn identity(name: Option<String>, symbol: Option<String>) -> Self {
        Self { name, symbol, ..Default::default() }
    }
}
