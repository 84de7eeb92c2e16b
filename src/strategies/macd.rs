//! MACD crossover strategy.

use crate::models::{IndicatorSnapshot, Signal, SignalKind};

/// MACD line vs signal line, gated on histogram direction.
///
/// The crossover alone is not enough: `macd > signal` with a non-positive
/// histogram emits nothing. Conservative gating, kept intentionally.
pub fn evaluate(snapshot: &IndicatorSnapshot) -> Vec<Signal> {
    let macd = &snapshot.macd;
    let mut signals = Vec::new();

    if macd.macd > macd.signal && macd.histogram > 0.0 {
        signals.push(Signal::new(
            SignalKind::Buy,
            "MACD line above signal line with positive momentum",
        ));
    } else if macd.macd < macd.signal && macd.histogram < 0.0 {
        signals.push(Signal::new(
            SignalKind::Sell,
            "MACD line below signal line with negative momentum",
        ));
    }

    signals
}
