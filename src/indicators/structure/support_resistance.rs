//! Nearest support and resistance levels.

use crate::models::Candle;

/// Nearest support and resistance around the current price.
///
/// Resistance is the smallest high strictly above the current price within the
/// window (nearest ceiling); support is the largest low strictly below it
/// (nearest floor). A plain nearest-neighbor scan, not a clustering or
/// pivot-point algorithm. Either side is `None` when no candle qualifies.
pub fn nearest_levels(candles: &[Candle], current_price: f64) -> (Option<f64>, Option<f64>) {
    let support = candles
        .iter()
        .map(|c| c.low)
        .filter(|&low| low < current_price)
        .fold(None, |best: Option<f64>, low| match best {
            Some(b) if b >= low => Some(b),
            _ => Some(low),
        });

    let resistance = candles
        .iter()
        .map(|c| c.high)
        .filter(|&high| high > current_price)
        .fold(None, |best: Option<f64>, high| match best {
            Some(b) if b <= high => Some(b),
            _ => Some(high),
        });

    (support, resistance)
}
