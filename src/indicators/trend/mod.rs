//! Trend indicators.

pub mod moving_average;
