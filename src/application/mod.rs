//! Application Layer - Use cases wiring domain, ports and adapters
//!
//! - `resolver`: per-chain fallback over market sources
//! - `scanner`: message handling, commands and replies

pub mod resolver;
pub mod scanner;

pub use resolver::MarketDataResolver;
pub use scanner::{Command, MessageScanner, DEFAULT_COMMAND_PREFIX};
