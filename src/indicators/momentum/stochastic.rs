//! Stochastic oscillator
//!
//! %K compares the close to its recent high/low range; %D smooths %K.

use crate::indicators::math;
use crate::models::{Candle, StochasticIndicator};

/// Calculate the latest %K/%D pair.
///
/// %K over `k_period` candles of high/low/close, %D as the `d_period` SMA of
/// the %K series. Returns `None` when the window is too short for both.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: usize,
    d_period: usize,
) -> Option<StochasticIndicator> {
    if k_period == 0 || candles.len() < k_period {
        return None;
    }

    let k_series: Vec<f64> = candles
        .windows(k_period)
        .map(|window| {
            let close = window[window.len() - 1].close;
            let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
            let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
            let range = highest - lowest;
            if range == 0.0 {
                // Flat window: the close sits nowhere in particular, read as mid-range.
                50.0
            } else {
                (close - lowest) / range * 100.0
            }
        })
        .collect();

    let d_series = math::sma_series(&k_series, d_period);

    Some(StochasticIndicator {
        k: *k_series.last()?,
        d: *d_series.last()?,
    })
}

/// Stochastic with the default (14, 3) periods.
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3)
}
