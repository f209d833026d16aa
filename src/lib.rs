//! Token Scout - Discord token scanner bot library
//!
//! Watches chat messages for Solana mints, EVM contracts and URLs, resolves
//! each token address against public market data APIs and replies with a
//! summary card.
//!
//! # Modules
//!
//! - `domain`: Address classification, market record, numeric coercion
//! - `ports`: Trait abstractions (JsonFetcher, MarketSource, ReplySink)
//! - `adapters`: External implementations (reqwest, DexScreener, Jupiter, CoinGecko, Solscan, Discord, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Resolver fallback chains and the message scanner
//! - `report`: Card layout and number formatting

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
pub mod report;
