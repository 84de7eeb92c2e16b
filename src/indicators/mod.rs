//! Technical indicator computation.
//!
//! Indicators are grouped by family the way charting platforms group them:
//! momentum, trend, volatility and market structure. The `engine` module
//! assembles the per-family calculations into one [`IndicatorSnapshot`].

pub mod engine;
pub mod math;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use engine::compute_indicators;
