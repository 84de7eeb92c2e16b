//! Indicator snapshot models.
//!
//! Each indicator is computed over the entire supplied candle window but only
//! its most recent value is retained. Indicators that cannot be computed from
//! too few candles default to zero (or a zero-filled composite) — a deliberate
//! degrade-gracefully policy, not an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    pub d: f64,
}

/// Most recent value of every supported indicator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub macd: MacdIndicator,
    pub bollinger: BollingerBandsIndicator,
    pub sma_20: f64,
    pub sma_50: f64,
    pub sma_200: f64,
    pub ema_12: f64,
    pub ema_26: f64,
    pub stochastic: StochasticIndicator,
    pub atr: f64,
}
