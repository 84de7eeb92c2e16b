//! Indicator snapshot assembly.

use crate::error::IndicatorError;
use crate::indicators::momentum::{macd, rsi, stochastic};
use crate::indicators::trend::moving_average;
use crate::indicators::volatility::{atr, bollinger};
use crate::models::{Candle, IndicatorSnapshot};

/// Compute the latest value of every supported indicator.
///
/// Every series is computed over the entire window; only the last element is
/// kept. Indicators that cannot be computed from too few candles fall back to
/// their zero default instead of failing — the caller is expected to supply
/// at least 200 candles for the full set to be meaningful, but the engine
/// itself does not enforce a minimum.
///
/// Fails only on an unrecoverable internal computation error (a non-finite
/// value in the finished snapshot), never on short input.
pub fn compute_indicators(candles: &[Candle]) -> Result<IndicatorSnapshot, IndicatorError> {
    let snapshot = IndicatorSnapshot {
        rsi: rsi::latest_rsi(candles, 14).unwrap_or_default(),
        macd: macd::calculate_macd_default(candles).unwrap_or_default(),
        bollinger: bollinger::calculate_bollinger_bands_default(candles).unwrap_or_default(),
        sma_20: moving_average::latest_sma(candles, 20).unwrap_or_default(),
        sma_50: moving_average::latest_sma(candles, 50).unwrap_or_default(),
        sma_200: moving_average::latest_sma(candles, 200).unwrap_or_default(),
        ema_12: moving_average::latest_ema(candles, 12).unwrap_or_default(),
        ema_26: moving_average::latest_ema(candles, 26).unwrap_or_default(),
        stochastic: stochastic::calculate_stochastic_default(candles).unwrap_or_default(),
        atr: atr::calculate_atr_default(candles).unwrap_or_default(),
    };

    validate(&snapshot)?;
    Ok(snapshot)
}

fn validate(snapshot: &IndicatorSnapshot) -> Result<(), IndicatorError> {
    let checks: [(&'static str, f64); 13] = [
        ("rsi", snapshot.rsi),
        ("macd", snapshot.macd.macd),
        ("macd_signal", snapshot.macd.signal),
        ("macd_histogram", snapshot.macd.histogram),
        ("bollinger_upper", snapshot.bollinger.upper),
        ("bollinger_middle", snapshot.bollinger.middle),
        ("bollinger_lower", snapshot.bollinger.lower),
        ("sma_20", snapshot.sma_20),
        ("sma_50", snapshot.sma_50),
        ("sma_200", snapshot.sma_200),
        ("ema_12", snapshot.ema_12),
        ("ema_26", snapshot.ema_26),
        ("atr", snapshot.atr),
    ];

    for (indicator, value) in checks {
        if !value.is_finite() {
            return Err(IndicatorError::NonFinite { indicator });
        }
    }
    if !snapshot.stochastic.k.is_finite() || !snapshot.stochastic.d.is_finite() {
        return Err(IndicatorError::NonFinite {
            indicator: "stochastic",
        });
    }

    Ok(())
}
