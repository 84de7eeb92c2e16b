//! Error taxonomy for the analysis pipeline.
//!
//! All variants are caught at the orchestrator/HTTP boundary and converted to
//! a no-result outcome for the affected symbol; none propagate as a crash.

use thiserror::Error;

/// Failure of an external market-data collaborator.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from exchange: {0}")]
    InvalidResponse(String),
}

/// Unrecoverable internal computation error in the indicator engine.
///
/// Short input never produces this — it degrades to zero defaults instead.
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("non-finite value produced by {indicator}")]
    NonFinite { indicator: &'static str },
}

/// Anything that can short-circuit a single symbol's analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to fetch market data: {0}")]
    DataFetch(#[from] MarketDataError),

    #[error("insufficient history for {symbol}: got {got} candles, need {min}")]
    InsufficientHistory {
        symbol: String,
        got: usize,
        min: usize,
    },

    #[error("indicator computation failed: {0}")]
    Computation(#[from] IndicatorError),
}
