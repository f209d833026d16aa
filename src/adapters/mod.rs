//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - HTTP: reqwest-backed JSON fetcher
//! - DexScreener: DEX pair aggregation for Solana and EVM
//! - Market Data: Jupiter and CoinGecko price fallbacks
//! - Token Metadata: Solscan name/symbol lookup
//! - Discord: gateway handler and reply sink
//! - CLI: Command-line interface handlers

pub mod cli;
pub mod dexscreener;
pub mod discord;
pub mod http;
pub mod market_data;
pub mod token_metadata;


pub use cli::CliApp;
pub use dexscreener::DexScreenerSource;
pub use discord::{DiscordError, DiscordSink};
pub use http::{HttpConfig, ReqwestFetcher};
pub use market_data::{CoinGeckoSource, JupiterPriceSource};
pub use token_metadata::{TokenMetadataSource, TokenMeta};
