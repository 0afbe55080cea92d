//! Market Data Sources
//!
//! Abstractions and implementations for retrieving raw coin documents.

mod coingecko;
mod fixture;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use fixture::StaticMarketSource;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Market data source trait (Strategy pattern)
///
/// Returns the provider's document untouched; reshaping is the extractor's job.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the raw document describing one asset
    async fn fetch_asset(&self, asset_id: &str) -> Result<Value>;

    /// Source name
    fn name(&self) -> &str;
}
