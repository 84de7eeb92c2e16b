//! Market-side models: candles and the thin collaborator payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV trading period. Immutable once fetched; candle sequences are
/// ordered oldest-to-newest with no duplicate timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// 24h ticker snapshot for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub last: f64,
    /// 24h price change in percent.
    pub percentage: f64,
    pub base_volume: f64,
}

/// Market-wide fear/greed index reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FearGreedIndex {
    pub value: u32,
    pub classification: String,
    pub timestamp: DateTime<Utc>,
}
