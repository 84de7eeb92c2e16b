//! Shared series math used by the indicator calculations.

/// Simple moving average series.
///
/// Returns one value per full window, oldest first. Empty when fewer than
/// `period` values are supplied.
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    values
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Exponential moving average series.
///
/// Seeded with the SMA of the first `period` values, then smoothed with the
/// standard multiplier `2 / (period + 1)`. Returns one value per input point
/// from the seed onward; empty when fewer than `period` values are supplied.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);

    let mut prev = seed;
    for &value in &values[period..] {
        prev = (value - prev) * multiplier + prev;
        series.push(prev);
    }

    series
}

/// Population standard deviation of a window.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

/// True range of one candle given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let range = high - low;
    let up = (high - prev_close).abs();
    let down = (low - prev_close).abs();
    range.max(up).max(down)
}
