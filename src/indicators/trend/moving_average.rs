//! Simple and exponential moving averages over closing prices.

use crate::indicators::math;
use crate::models::Candle;

/// Latest SMA of the closing prices, `None` when the window is shorter than
/// `period`.
pub fn latest_sma(candles: &[Candle], period: usize) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::sma_series(&closes, period).last().copied()
}

/// Latest EMA of the closing prices, `None` when the window is shorter than
/// `period`.
pub fn latest_ema(candles: &[Candle], period: usize) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period).last().copied()
}
