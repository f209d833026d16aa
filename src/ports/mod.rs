//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Outbound HTTP (JSON GET)
//! - Market data sources in a fallback chain
//! - The chat platform (incoming messages, reply sink)

pub mod chat;
pub mod http;
pub mod market_source;

#[cfg(test)]
pub mod mocks;

pub use chat::{Author, Card, CardField, CardFooter, IncomingMessage, MessageRef, Reply, ReplyError, ReplySink};
pub use http::{FetchError, JsonFetcher};
pub use market_source::{MarketSource, SourceError};
