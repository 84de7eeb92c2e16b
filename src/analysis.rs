//! Analysis orchestrator.
//!
//! Sequences fetch → indicators → strategies → sentiment → support/resistance
//! into one result record per symbol. Any failure at any stage short-circuits
//! the whole analysis for that symbol; callers never receive a partial record.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::indicators::compute_indicators;
use crate::indicators::structure::support_resistance;
use crate::models::AnalysisResult;
use crate::services::MarketDataProvider;
use crate::signals;
use crate::strategies;
use crate::watchlist::Watchlist;

/// Minimum candles for the longest-window indicator (the 200-period SMA).
pub const MIN_CANDLES: usize = 200;

/// Trailing window for the support/resistance scan.
const LEVEL_LOOKBACK: usize = 50;

pub struct Analyzer {
    provider: Arc<dyn MarketDataProvider>,
    timeframe: String,
    candle_limit: usize,
}

impl Analyzer {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        timeframe: impl Into<String>,
        candle_limit: usize,
    ) -> Self {
        Self {
            provider,
            timeframe: timeframe.into(),
            candle_limit: candle_limit.max(MIN_CANDLES),
        }
    }

    /// Run one full analysis for a symbol.
    pub async fn analyze(&self, symbol: &str) -> Result<AnalysisResult, AnalysisError> {
        let candles = self
            .provider
            .fetch_candles(symbol, &self.timeframe, self.candle_limit)
            .await?;

        if candles.len() < MIN_CANDLES {
            return Err(AnalysisError::InsufficientHistory {
                symbol: symbol.to_string(),
                got: candles.len(),
                min: MIN_CANDLES,
            });
        }

        let snapshot = compute_indicators(&candles)?;

        // len >= MIN_CANDLES, so the window is non-empty.
        let latest = &candles[candles.len() - 1];
        let current_price = latest.close;
        let volume_24h = latest.volume;

        let signals = strategies::evaluate_all(&candles, &snapshot);
        let sentiment = signals::aggregate(&signals);

        let level_window = &candles[candles.len() - LEVEL_LOOKBACK.min(candles.len())..];
        let (support, resistance) =
            support_resistance::nearest_levels(level_window, current_price);

        debug!(
            symbol,
            score = sentiment.score,
            signal_count = signals.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            symbol: symbol.to_string(),
            current_price,
            volume_24h,
            indicators: snapshot,
            signals,
            sentiment,
            support,
            resistance,
            timestamp: Utc::now(),
        })
    }

    /// Analyze every watchlist symbol, strictly sequentially.
    ///
    /// One fetch-then-analyze cycle completes before the next begins. A
    /// failing symbol is logged and skipped; it never aborts the rest of the
    /// batch.
    pub async fn analyze_watchlist(&self, watchlist: &Watchlist) -> Vec<AnalysisResult> {
        let symbols = watchlist.symbols().await;
        let mut results = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            match self.analyze(&symbol).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "skipping symbol in watchlist analysis");
                }
            }
        }

        results
    }
}
