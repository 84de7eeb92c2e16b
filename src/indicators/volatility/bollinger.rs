//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (std_dev * standard deviation)
//! Lower Band = Middle - (std_dev * standard deviation)

use crate::indicators::math;
use crate::models::{BollingerBandsIndicator, Candle};

/// Calculate the latest Bollinger Bands over the closing prices.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: usize,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = *math::sma_series(&closes, period).last()?;
    let std = math::std_dev(&closes[closes.len() - period..]);

    Some(BollingerBandsIndicator {
        upper: middle + std_dev * std,
        middle,
        lower: middle - std_dev * std,
    })
}

/// Bollinger Bands with default parameters (20 SMA, 2σ).
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, 20, 2.0)
}
