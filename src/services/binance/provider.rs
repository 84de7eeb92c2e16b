//! Market data provider backed by the Binance public REST API.

use std::collections::HashMap;

use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::MarketDataError;
use crate::models::{Candle, Ticker};
use crate::services::market_data::MarketDataProvider;

const MAX_RETRIES: usize = 3;

pub struct BinanceMarketDataProvider {
    base_url: String,
    client: reqwest::Client,
}

/// Raw 24hr ticker payload. Binance serializes every numeric field as a
/// string.
#[derive(Debug, Deserialize)]
struct TickerPayload {
    symbol: String,
    #[serde(rename = "lastPrice")]
    last_price: String,
    #[serde(rename = "priceChangePercent")]
    price_change_percent: String,
    volume: String,
}

impl BinanceMarketDataProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Build with an injected client and base URL, used by tests to point at
    /// a mock server.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, MarketDataError> {
        let url = format!("{}{}", self.base_url, path);
        let fetch = || async {
            let response = self.client.get(&url).send().await?;
            let response = response.error_for_status()?;
            Ok::<Value, MarketDataError>(response.json().await?)
        };

        fetch
            .retry(ExponentialBuilder::default().with_max_times(MAX_RETRIES))
            .when(|e| matches!(e, MarketDataError::Http(_)))
            .notify(|e, dur| {
                warn!(error = %e, backoff_ms = dur.as_millis() as u64, "retrying exchange request");
            })
            .await
    }

    fn parse_kline_row(row: &Value) -> Result<Candle, MarketDataError> {
        let fields = row
            .as_array()
            .ok_or_else(|| MarketDataError::InvalidResponse("kline row is not an array".into()))?;
        if fields.len() < 6 {
            return Err(MarketDataError::InvalidResponse(format!(
                "kline row has {} fields, expected at least 6",
                fields.len()
            )));
        }

        let open_time = fields[0].as_i64().ok_or_else(|| {
            MarketDataError::InvalidResponse("kline open time is not an integer".into())
        })?;
        let timestamp: DateTime<Utc> = DateTime::from_timestamp_millis(open_time)
            .ok_or_else(|| MarketDataError::InvalidResponse("kline open time out of range".into()))?;

        Ok(Candle::new(
            Self::parse_price(&fields[1], "open")?,
            Self::parse_price(&fields[2], "high")?,
            Self::parse_price(&fields[3], "low")?,
            Self::parse_price(&fields[4], "close")?,
            Self::parse_price(&fields[5], "volume")?,
            timestamp,
        ))
    }

    fn parse_price(field: &Value, name: &str) -> Result<f64, MarketDataError> {
        // Binance serializes prices as strings; accept plain numbers too.
        match field {
            Value::String(s) => s.parse().map_err(|_| {
                MarketDataError::InvalidResponse(format!("invalid {} value: {}", name, s))
            }),
            Value::Number(n) => n.as_f64().ok_or_else(|| {
                MarketDataError::InvalidResponse(format!("invalid {} value: {}", name, n))
            }),
            other => Err(MarketDataError::InvalidResponse(format!(
                "invalid {} value: {}",
                name, other
            ))),
        }
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for BinanceMarketDataProvider {
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let path = format!(
            "/api/v3/klines?symbol={}&interval={}&limit={}",
            symbol, timeframe, limit
        );
        let body = self.get_json(&path).await?;

        let rows = body.as_array().ok_or_else(|| {
            MarketDataError::InvalidResponse("klines response is not an array".into())
        })?;

        let mut candles = rows
            .iter()
            .map(Self::parse_kline_row)
            .collect::<Result<Vec<_>, _>>()?;

        // Binance returns rows ascending by open time; duplicate timestamps
        // would break the candle window contract.
        candles.dedup_by_key(|c| c.timestamp);

        debug!(symbol, timeframe, count = candles.len(), "fetched candles");
        Ok(candles)
    }

    async fn fetch_tickers(&self) -> Result<HashMap<String, Ticker>, MarketDataError> {
        let body = self.get_json("/api/v3/ticker/24hr").await?;

        let payloads: Vec<TickerPayload> = serde_json::from_value(body)
            .map_err(|e| MarketDataError::InvalidResponse(format!("ticker payload: {}", e)))?;

        let mut tickers = HashMap::with_capacity(payloads.len());
        for payload in payloads {
            let last = payload.last_price.parse().unwrap_or(0.0);
            let percentage = payload.price_change_percent.parse().unwrap_or(0.0);
            let base_volume = payload.volume.parse().unwrap_or(0.0);
            tickers.insert(
                payload.symbol.clone(),
                Ticker {
                    symbol: payload.symbol,
                    last,
                    percentage,
                    base_volume,
                },
            );
        }

        Ok(tickers)
    }
}
