//! Market structure indicators.

pub mod support_resistance;
