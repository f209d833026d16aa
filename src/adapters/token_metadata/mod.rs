//! Token Metadata Adapter
//!
//! Fetches token identity (name, symbol) from the Solscan public API.
//! Used as the last step of the Solana fallback chain.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use token_scout::adapters::{ReqwestFetcher, TokenMetadataSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = TokenMetadataSource::new(Arc::new(ReqwestFetcher::new()?));
//!     let meta = source.get_token_meta("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263").await?;
//!     println!("{:?} ({:?})", meta.name, meta.symbol);
//!     Ok(())
//! }
//! ```

mod client;
mod types;

pub use client::{TokenMetadataSource, SOLSCAN_API};
pub use types::TokenMeta;
