//! Terminal artifact of one analysis run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::indicators::IndicatorSnapshot;
use super::signal::{SentimentResult, Signal};

/// Result of one orchestration run for a symbol.
///
/// A pure function of the input candle window at computation time: no hidden
/// state is carried between runs. Not cached; discarded after being returned
/// to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub current_price: f64,
    pub volume_24h: f64,
    pub indicators: IndicatorSnapshot,
    pub signals: Vec<Signal>,
    pub sentiment: SentimentResult,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub timestamp: DateTime<Utc>,
}
