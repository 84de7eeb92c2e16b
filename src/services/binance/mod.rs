//! Binance REST market data provider.

pub mod provider;

pub use provider::BinanceMarketDataProvider;
