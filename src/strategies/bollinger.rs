//! Bollinger band breakout strategy.

use crate::models::{IndicatorSnapshot, Signal, SignalKind};

/// Close outside the bands. Strict comparisons: a close exactly on a band
/// emits nothing.
pub fn evaluate(snapshot: &IndicatorSnapshot, current_price: f64) -> Vec<Signal> {
    let bands = &snapshot.bollinger;
    let mut signals = Vec::new();

    if current_price < bands.lower {
        signals.push(Signal::new(
            SignalKind::Buy,
            "Price below the lower Bollinger band",
        ));
    } else if current_price > bands.upper {
        signals.push(Signal::new(
            SignalKind::Sell,
            "Price above the upper Bollinger band",
        ));
    }

    signals
}
