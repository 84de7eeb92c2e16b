//! Unit tests for indicator snapshot assembly

use chrono::{TimeZone, Utc};
use marketpulse::indicators::compute_indicators;
use marketpulse::models::Candle;

fn create_test_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + ((i * 7) % 13) as f64 * 0.5;
            let timestamp = Utc.timestamp_opt(1_700_000_000 + i as i64 * 3600, 0).unwrap();
            Candle::new(close, close + 1.0, close - 1.0, close, 1000.0, timestamp)
        })
        .collect()
}

#[test]
fn snapshot_is_deterministic() {
    let candles = create_test_candles(250);
    let first = compute_indicators(&candles).unwrap();
    let second = compute_indicators(&candles).unwrap();
    assert_eq!(first, second);
}

#[test]
fn short_input_degrades_to_zero_defaults() {
    let candles = create_test_candles(10);
    let snapshot = compute_indicators(&candles).unwrap();

    // Too few candles for any 14+ period indicator.
    assert_eq!(snapshot.rsi, 0.0);
    assert_eq!(snapshot.sma_20, 0.0);
    assert_eq!(snapshot.sma_200, 0.0);
    assert_eq!(snapshot.macd.macd, 0.0);
    assert_eq!(snapshot.macd.signal, 0.0);
    assert_eq!(snapshot.macd.histogram, 0.0);
    assert_eq!(snapshot.bollinger.middle, 0.0);
    assert_eq!(snapshot.stochastic.k, 0.0);
    assert_eq!(snapshot.atr, 0.0);
}

#[test]
fn empty_input_degrades_to_zero_defaults() {
    let snapshot = compute_indicators(&[]).unwrap();
    assert_eq!(snapshot.rsi, 0.0);
    assert_eq!(snapshot.ema_12, 0.0);
}

#[test]
fn full_window_populates_every_indicator() {
    let candles = create_test_candles(250);
    let snapshot = compute_indicators(&candles).unwrap();

    assert!(snapshot.rsi > 0.0 && snapshot.rsi <= 100.0);
    assert!(snapshot.sma_20 > 0.0);
    assert!(snapshot.sma_50 > 0.0);
    assert!(snapshot.sma_200 > 0.0);
    assert!(snapshot.ema_12 > 0.0);
    assert!(snapshot.ema_26 > 0.0);
    assert!(snapshot.bollinger.upper >= snapshot.bollinger.middle);
    assert!(snapshot.bollinger.middle >= snapshot.bollinger.lower);
    assert!(snapshot.stochastic.k >= 0.0 && snapshot.stochastic.k <= 100.0);
    assert!(snapshot.stochastic.d >= 0.0 && snapshot.stochastic.d <= 100.0);
    assert!(snapshot.atr > 0.0);
}

#[test]
fn bands_are_symmetric_around_middle() {
    let candles = create_test_candles(250);
    let snapshot = compute_indicators(&candles).unwrap();
    let upper_gap = snapshot.bollinger.upper - snapshot.bollinger.middle;
    let lower_gap = snapshot.bollinger.middle - snapshot.bollinger.lower;
    assert!((upper_gap - lower_gap).abs() < 1e-9);
}
