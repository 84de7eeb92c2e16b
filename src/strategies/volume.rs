//! Volume breakout strategy.

use crate::models::{Candle, Signal, SignalKind};

const LOOKBACK: usize = 20;
const VOLUME_SPIKE_FACTOR: f64 = 2.0;
const PRICE_CHANGE_PCT: f64 = 2.0;

/// Volume spike confirmed by a decisive price move.
///
/// Requires at least 21 candles. The average is taken over the trailing 20
/// candles ending at the current one — the current candle is part of its own
/// baseline, and that exact windowing is part of the contract. A volume spike
/// without a >2% move in either direction emits nothing.
pub fn evaluate(candles: &[Candle]) -> Vec<Signal> {
    if candles.len() < LOOKBACK + 1 {
        return Vec::new();
    }

    let current = &candles[candles.len() - 1];
    let previous = &candles[candles.len() - 2];

    let trailing = &candles[candles.len() - LOOKBACK..];
    let avg_volume = trailing.iter().map(|c| c.volume).sum::<f64>() / LOOKBACK as f64;

    let price_change_pct = if previous.close == 0.0 {
        0.0
    } else {
        (current.close - previous.close) / previous.close * 100.0
    };

    let mut signals = Vec::new();
    if current.volume > VOLUME_SPIKE_FACTOR * avg_volume {
        if price_change_pct > PRICE_CHANGE_PCT {
            signals.push(Signal::new(
                SignalKind::StrongBuy,
                format!(
                    "Volume spike with price up {:.1}% on the last candle",
                    price_change_pct
                ),
            ));
        } else if price_change_pct < -PRICE_CHANGE_PCT {
            signals.push(Signal::new(
                SignalKind::StrongSell,
                format!(
                    "Volume spike with price down {:.1}% on the last candle",
                    price_change_pct.abs()
                ),
            ));
        }
    }

    signals
}
