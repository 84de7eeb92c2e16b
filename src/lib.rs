//! Marketpulse signal engine
//!
//! Polls an exchange for OHLCV history, derives a fixed set of technical
//! indicators, applies independent rule-based strategies and folds the
//! resulting signals into an aggregate sentiment score. Every analysis is a
//! one-shot, stateless batch computation over a bounded candle window.

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;
pub mod watchlist;
