//! RSI threshold strategy.

use crate::models::{IndicatorSnapshot, Signal, SignalKind};

/// Threshold rules on the latest RSI value.
///
/// Checks run in sequence with strict comparisons, so a boundary value falls
/// to the first matching branch: `<25` wins over `<35`, `>75` wins over `>65`.
/// The 35–65 band emits nothing.
pub fn evaluate(snapshot: &IndicatorSnapshot) -> Vec<Signal> {
    let rsi = snapshot.rsi;
    let mut signals = Vec::new();

    if rsi < 25.0 {
        signals.push(Signal::new(
            SignalKind::StrongBuy,
            format!("RSI at {:.1} indicates extremely oversold conditions", rsi),
        ));
    } else if rsi < 35.0 {
        signals.push(Signal::new(
            SignalKind::Buy,
            format!("RSI at {:.1} indicates oversold conditions", rsi),
        ));
    } else if rsi > 75.0 {
        signals.push(Signal::new(
            SignalKind::StrongSell,
            format!("RSI at {:.1} indicates extremely overbought conditions", rsi),
        ));
    } else if rsi > 65.0 {
        signals.push(Signal::new(
            SignalKind::Sell,
            format!("RSI at {:.1} indicates overbought conditions", rsi),
        ));
    }

    signals
}
