//! Sentiment aggregation.

use crate::models::{Sentiment, SentimentResult, Signal};

/// Fold a signal list into one sentiment score.
///
/// Each signal contributes its kind's fixed score (+3 strong buy, +1 buy,
/// -1 sell, -3 strong sell). Classification uses strict inequalities only:
/// a score of exactly 5 is BULLISH, not VERY BULLISH, and exactly 2 is
/// NEUTRAL.
pub fn aggregate(signals: &[Signal]) -> SentimentResult {
    let score: i32 = signals.iter().map(|s| s.kind.score()).sum();

    let sentiment = if score > 5 {
        Sentiment::VeryBullish
    } else if score > 2 {
        Sentiment::Bullish
    } else if score < -5 {
        Sentiment::VeryBearish
    } else if score < -2 {
        Sentiment::Bearish
    } else {
        Sentiment::Neutral
    };

    SentimentResult { sentiment, score }
}
