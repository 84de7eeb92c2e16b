//! Environment-based configuration.

use std::env;

/// Deployment environment name, defaulting to sandbox.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub timeframe: String,
    pub candle_limit: usize,
    pub exchange_base_url: String,
    pub fear_greed_base_url: String,
    /// Symbols seeded into the watchlist at startup.
    pub watchlist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            timeframe: "1h".to_string(),
            candle_limit: 500,
            exchange_base_url: "https://api.binance.com".to_string(),
            fear_greed_base_url: "https://api.alternative.me".to_string(),
            watchlist: vec![
                "BTCUSDT".to_string(),
                "ETHUSDT".to_string(),
                "SOLUSDT".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults per field.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let watchlist = env::var("WATCHLIST")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.watchlist);

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            timeframe: env::var("TIMEFRAME").unwrap_or(defaults.timeframe),
            candle_limit: env::var("CANDLE_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(defaults.candle_limit),
            exchange_base_url: env::var("EXCHANGE_BASE_URL").unwrap_or(defaults.exchange_base_url),
            fear_greed_base_url: env::var("FEAR_GREED_BASE_URL")
                .unwrap_or(defaults.fear_greed_base_url),
            watchlist,
        }
    }
}
