//! Rule-based strategy evaluators.
//!
//! Four independent, side-effect-free evaluators. Each consumes the candle
//! window and/or the indicator snapshot and produces zero or more signals in
//! rule-check order. There is no ordering guarantee across evaluators beyond
//! the fixed sequence [`evaluate_all`] runs them in.

pub mod bollinger;
pub mod macd;
pub mod rsi;
pub mod volume;

use crate::models::{Candle, IndicatorSnapshot, Signal};

/// Run every strategy and concatenate the signals.
pub fn evaluate_all(candles: &[Candle], snapshot: &IndicatorSnapshot) -> Vec<Signal> {
    let current_price = candles.last().map(|c| c.close).unwrap_or_default();

    let mut signals = Vec::new();
    signals.extend(rsi::evaluate(snapshot));
    signals.extend(macd::evaluate(snapshot));
    signals.extend(bollinger::evaluate(snapshot, current_price));
    signals.extend(volume::evaluate(candles));
    signals
}
