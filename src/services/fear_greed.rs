//! Client for the alternative.me crypto fear/greed index.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::MarketDataError;
use crate::models::FearGreedIndex;

pub struct FearGreedClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct FngResponse {
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
    value_classification: String,
    timestamp: String,
}

impl FearGreedClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the latest index reading.
    pub async fn fetch(&self) -> Result<FearGreedIndex, MarketDataError> {
        let url = format!("{}/fng/", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: FngResponse = response.json().await?;

        let entry = body.data.into_iter().next().ok_or_else(|| {
            MarketDataError::InvalidResponse("fear/greed response has no entries".into())
        })?;

        let value = entry.value.parse().map_err(|_| {
            MarketDataError::InvalidResponse(format!("invalid index value: {}", entry.value))
        })?;
        let unix: i64 = entry.timestamp.parse().map_err(|_| {
            MarketDataError::InvalidResponse(format!("invalid timestamp: {}", entry.timestamp))
        })?;
        let timestamp: DateTime<Utc> = DateTime::from_timestamp(unix, 0).ok_or_else(|| {
            MarketDataError::InvalidResponse(format!("timestamp out of range: {}", unix))
        })?;

        Ok(FearGreedIndex {
            value,
            classification: entry.value_classification,
            timestamp,
        })
    }
}
