//! Test utilities for API server integration tests

use std::sync::Arc;
use std::time::Instant;

use axum_test::TestServer;
use marketpulse::analysis::Analyzer;
use marketpulse::core::http::{create_router, AppState, HealthStatus};
use marketpulse::metrics::Metrics;
use marketpulse::services::binance::BinanceMarketDataProvider;
use marketpulse::services::{FearGreedClient, MarketDataProvider};
use marketpulse::watchlist::Watchlist;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API server wired to a mocked exchange.
pub struct TestApiServer {
    pub server: TestServer,
    pub exchange: MockServer,
    pub watchlist: Watchlist,
}

impl TestApiServer {
    /// Server whose exchange serves a full 250-candle history.
    pub async fn new() -> Self {
        Self::with_candle_count(250).await
    }

    pub async fn with_candle_count(count: usize) -> Self {
        let exchange = MockServer::start().await;
        mock_klines(&exchange, count).await;
        mock_tickers(&exchange).await;
        mock_fear_greed(&exchange).await;

        let provider: Arc<dyn MarketDataProvider> = Arc::new(
            BinanceMarketDataProvider::with_client(exchange.uri(), reqwest::Client::new()),
        );
        let analyzer = Arc::new(Analyzer::new(provider.clone(), "1h", 500));
        let fear_greed = Arc::new(FearGreedClient::new(exchange.uri()));
        let watchlist = Watchlist::with_symbols(vec!["BTCUSDT".to_string()]);

        let state = AppState {
            analyzer,
            provider,
            fear_greed,
            watchlist: watchlist.clone(),
            metrics: Arc::new(Metrics::new().expect("Should create metrics")),
            health: Arc::new(RwLock::new(HealthStatus::default())),
            start_time: Arc::new(Instant::now()),
        };

        let server = TestServer::new(create_router(state)).expect("Should start test server");

        Self {
            server,
            exchange,
            watchlist,
        }
    }
}

/// Kline rows in Binance wire shape: open time plus stringified OHLCV.
fn kline_rows(count: usize) -> Value {
    let rows: Vec<Value> = (0..count)
        .map(|i| {
            let open_time = 1_700_000_000_000i64 + i as i64 * 3_600_000;
            let close = 100.0 + ((i * 7) % 13) as f64 * 0.5;
            json!([
                open_time,
                format!("{:.2}", close),
                format!("{:.2}", close + 1.0),
                format!("{:.2}", close - 1.0),
                format!("{:.2}", close),
                "1000.00",
                open_time + 3_599_999,
                "100000.00"
            ])
        })
        .collect();
    json!(rows)
}

async fn mock_klines(server: &MockServer, count: usize) {
    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kline_rows(count)))
        .mount(server)
        .await;
}

async fn mock_tickers(server: &MockServer) {
    let body = json!([
        {
            "symbol": "AAAUSDT",
            "lastPrice": "1.50",
            "priceChangePercent": "12.5",
            "volume": "100000.00"
        },
        {
            "symbol": "BBBUSDT",
            "lastPrice": "2.00",
            "priceChangePercent": "-3.0",
            "volume": "50000.00"
        },
        {
            "symbol": "CCCUSDT",
            "lastPrice": "3.25",
            "priceChangePercent": "25.0",
            "volume": "10000.00"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/24hr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mock_fear_greed(server: &MockServer) {
    let body = json!({
        "name": "Fear and Greed Index",
        "data": [
            {
                "value": "54",
                "value_classification": "Neutral",
                "timestamp": "1700000000"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/fng/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
