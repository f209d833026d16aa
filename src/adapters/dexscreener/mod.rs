//! DexScreener Adapter
//!
//! DEX aggregation source used first for both Solana and EVM tokens.
//! Reports the most liquid pair referencing the token contract.

mod client;
mod types;

pub use client::{DexScreenerSource, DEXSCREENER_API};
pub use types::{select_most_liquid, Liquidity, Pair, PairToken, TokensResponse, Windowed};
