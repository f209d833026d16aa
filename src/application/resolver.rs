//! Market Data Resolver
//!
//! Resolves an address into a `TokenMarketRecord` by walking an ordered list of
//! market sources for its chain. Each source decides from the record built so
//! far whether it still has something to add; failures and timeouts are logged
//! and skipped, so resolution itself never fails.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::adapters::dexscreener::DexScreenerSource;
use crate::adapters::http::DEFAULT_TIMEOUT;
use crate::adapters::market_data::{CoinGeckoSource, JupiterPriceSource};
use crate::adapters::token_metadata::TokenMetadataSource;
use crate::config::SourcesSection;
use crate::domain::{ChainKind, TokenMarketRecord};
use crate::ports::http::JsonFetcher;
use crate::ports::market_source::MarketSource;

/// Per-chain fallback chains of market sources
#[derive(Clone)]
pub struct MarketDataResolver {
    solana: Vec<Arc<dyn MarketSource>>,
    evm: Vec<Arc<dyn MarketSource>>,
    timeout: Duration,
}

impl MarketDataResolver {
    /// Standard chains against the public APIs
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self::from_config(fetcher, &SourcesSection::default(), DEFAULT_TIMEOUT)
    }

    /// Standard chains with configured base URLs.
    ///
    /// Solana: DEX pairs, then Jupiter price, then Solscan metadata.
    /// EVM: DEX pairs, then CoinGecko price index.
    pub fn from_config(fetcher: Arc<dyn JsonFetcher>, urls: &SourcesSection, per_source: Duration) -> Self {
        let solana: Vec<Arc<dyn MarketSource>> = vec![
            Arc::new(DexScreenerSource::with_base_url(
                fetcher.clone(),
                ChainKind::Solana,
                &urls.dexscreener_url,
            )),
            Arc::new(JupiterPriceSource::with_base_url(fetcher.clone(), &urls.jupiter_price_url)),
            Arc::new(TokenMetadataSource::with_base_url(fetcher.clone(), &urls.solscan_url)),
        ];

        let evm: Vec<Arc<dyn MarketSource>> = vec![
            Arc::new(DexScreenerSource::with_base_url(
                fetcher.clone(),
                ChainKind::Evm,
                &urls.dexscreener_url,
            )),
            Arc::new(CoinGeckoSource::with_base_url(fetcher, &urls.coingecko_url)),
        ];

        Self::with_sources(solana, evm, per_source)
    }

    /// Custom chains
    pub fn with_sources(
        solana: Vec<Arc<dyn MarketSource>>,
        evm: Vec<Arc<dyn MarketSource>>,
        per_source: Duration,
    ) -> Self {
        Self {
            solana,
            evm,
            timeout: per_source,
        }
    }

    /// Sources consulted for `chain`, in order. URLs and unknown strings have none.
    pub fn sources_for(&self, chain: ChainKind) -> &[Arc<dyn MarketSource>] {
        match chain {
            ChainKind::Solana => self.solana.as_slice(),
            ChainKind::Evm => self.evm.as_slice(),
            ChainKind::Url | ChainKind::Unknown => &[],
        }
    }

    /// Budget for a single source query
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve `address`. Always returns a record; `found` tells whether any
    /// source had market data for it.
    pub async fn resolve(&self, address: &str, chain: ChainKind) -> TokenMarketRecord {
        let mut record = TokenMarketRecord::default();

        for source in self.sources_for(chain) {
            if !source.should_query(&record) {
                tracing::debug!("Skipping {} for {}", source.name(), address);
                continue;
            }

            match timeout(self.timeout, source.query(address)).await {
                Ok(Ok(Some(patch))) => {
                    tracing::info!(
                        "{} answered for {} (found: {})",
                        source.name(),
                        address,
                        patch.found
                    );
                    record.apply(patch);
                }
                Ok(Ok(None)) => {
                    tracing::debug!("{} has no data for {}", source.name(), address);
                }
                Ok(Err(e)) => {
                    tracing::warn!("{} failed for {}: {}", source.name(), address, e);
                }
                Err(_) => {
                    tracing::warn!(
                        "{} timed out after {:?} for {}",
                        source.name(),
                        self.timeout,
                        address
                    );
                }
            }
        }

        record
    }
}
