//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod indicators;
pub mod market;
pub mod signal;

pub use analysis::AnalysisResult;
pub use indicators::{
    BollingerBandsIndicator, IndicatorSnapshot, MacdIndicator, StochasticIndicator,
};
pub use market::{Candle, FearGreedIndex, Ticker};
pub use signal::{Sentiment, SentimentResult, Signal, SignalKind};
