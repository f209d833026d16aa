//! Token Metadata Types
//!
//! Response of Solscan's `GET /token/meta?tokenAddress=` endpoint.

use serde::Deserialize;

use crate::domain::coerce::{lenient_f64, lenient_string};

/// Token metadata as reported by the explorer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenMeta {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub decimals: f64,
}

impl TokenMeta {
    /// The explorer knows this mint when it reports a name
    pub fn is_known(&self) -> bool {
        self.name.is_some()
    }
}
