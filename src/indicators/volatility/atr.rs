//! ATR (Average True Range) indicator
//!
//! ATR measures market volatility by averaging true range over a period.

use crate::indicators::math;
use crate::models::Candle;

/// Calculate the latest ATR over high/low/close.
///
/// Averaged with an SMA of the true-range series. `None` when the window
/// holds fewer than `period + 1` candles.
pub fn calculate_atr(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let tr_values: Vec<f64> = candles
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect();

    math::sma_series(&tr_values, period).last().copied()
}

/// ATR with the default 14 period.
pub fn calculate_atr_default(candles: &[Candle]) -> Option<f64> {
    calculate_atr(candles, 14)
}
