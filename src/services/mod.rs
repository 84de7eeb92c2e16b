//! External collaborators feeding the pipeline raw market data.

pub mod binance;
pub mod fear_greed;
pub mod market_data;

pub use fear_greed::FearGreedClient;
pub use market_data::MarketDataProvider;
