//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(signal_period) of the MACD series
//! Histogram = MACD - Signal

use crate::indicators::math;
use crate::models::{Candle, MacdIndicator};

/// Calculate the latest MACD triple over the closing prices.
///
/// Returns `None` when the window cannot seed the slow EMA plus the signal
/// EMA of the MACD series.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast = math::ema_series(&closes, fast_period);
    let slow = math::ema_series(&closes, slow_period);
    if fast.is_empty() || slow.is_empty() {
        return None;
    }

    // Both series end at the latest close; align them from the tail so each
    // MACD point subtracts EMAs of the same candle.
    let len = fast.len().min(slow.len());
    let fast_tail = &fast[fast.len() - len..];
    let slow_tail = &slow[slow.len() - len..];
    let macd_values: Vec<f64> = fast_tail
        .iter()
        .zip(slow_tail)
        .map(|(f, s)| f - s)
        .collect();

    let signal_series = math::ema_series(&macd_values, signal_period);
    let signal = *signal_series.last()?;
    let macd = *macd_values.last()?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    })
}

/// MACD with the default (12, 26, 9) periods.
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
