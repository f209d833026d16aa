//! Market Data Adapters
//!
//! Price-only fallback sources:
//! - `JupiterPriceSource`: Jupiter price API, Solana mints
//! - `CoinGeckoSource`: CoinGecko token price index, EVM contracts

mod coingecko;
mod jupiter_price;

pub use coingecko::{CoinGeckoSource, COINGECKO_API};
pub use jupiter_price::{JupiterPriceSource, JUPITER_PRICE_API};
