//! Signal and sentiment models.

use serde::{Deserialize, Serialize};

/// Strength and direction of a strategy signal.
///
/// An explicit tagged enum so aggregation is a direct score lookup rather than
/// string matching on the serialized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl SignalKind {
    /// Contribution to the aggregate sentiment score.
    pub fn score(self) -> i32 {
        match self {
            SignalKind::StrongBuy => 3,
            SignalKind::Buy => 1,
            SignalKind::Sell => -1,
            SignalKind::StrongSell => -3,
        }
    }
}

/// A single strategy signal with its human-readable rationale.
/// Value object, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub description: String,
}

impl Signal {
    pub fn new(kind: SignalKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "VERY BULLISH")]
    VeryBullish,
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "BEARISH")]
    Bearish,
    #[serde(rename = "VERY BEARISH")]
    VeryBearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub score: i32,
}
