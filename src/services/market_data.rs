//! Market data provider interface for data source integration.

use std::collections::HashMap;

use crate::error::MarketDataError;
use crate::models::{Candle, Ticker};

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get historical candles for a symbol, ascending by open time.
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;

    /// Get 24h ticker snapshots for every symbol the exchange lists.
    async fn fetch_tickers(&self) -> Result<HashMap<String, Ticker>, MarketDataError>;
}
