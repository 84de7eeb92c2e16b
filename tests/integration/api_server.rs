//! Integration tests for the API Server
//!
//! Exercises the HTTP endpoints against a wiremock-backed exchange.

#[path = "api_server/test_utils.rs"]
mod test_utils;

use serde_json::{json, Value};

use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "marketpulse-analysis-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn analysis_endpoint_returns_full_result() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/analysis/BTCUSDT").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "BTCUSDT");
    assert!(body["current_price"].as_f64().unwrap() > 0.0);
    assert!(body["indicators"]["rsi"].as_f64().is_some());
    assert!(body["indicators"]["macd"]["histogram"].as_f64().is_some());
    assert!(body["signals"].as_array().is_some());
    assert!(body["sentiment"]["score"].as_i64().is_some());
    let sentiment = body["sentiment"]["sentiment"].as_str().unwrap();
    assert!(
        ["VERY BULLISH", "BULLISH", "NEUTRAL", "BEARISH", "VERY BEARISH"].contains(&sentiment),
        "unexpected sentiment label: {}",
        sentiment
    );
}

#[tokio::test]
async fn analysis_endpoint_lowercase_symbol_is_normalized() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/analysis/btcusdt").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "BTCUSDT");
}

#[tokio::test]
async fn analysis_endpoint_returns_not_found_on_short_history() {
    let app = TestApiServer::with_candle_count(150).await;
    let response = app.server.get("/api/analysis/BTCUSDT").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn watchlist_crud_round_trip() {
    let app = TestApiServer::new().await;

    let response = app.server.get("/api/watchlist").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["symbols"], json!(["BTCUSDT"]));

    let response = app
        .server
        .post("/api/watchlist")
        .json(&json!({ "symbol": "ethusdt" }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["symbol"], "ETHUSDT");
    assert_eq!(body["added"], true);

    let response = app.server.get("/api/watchlist").await;
    let body: Value = response.json();
    assert_eq!(body["symbols"], json!(["BTCUSDT", "ETHUSDT"]));

    let response = app.server.delete("/api/watchlist/ETHUSDT").await;
    assert_eq!(response.status_code(), 204);

    let response = app.server.delete("/api/watchlist/ETHUSDT").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn watchlist_rejects_blank_symbol() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/watchlist")
        .json(&json!({ "symbol": "   " }))
        .await;
    assert_eq!(response.status_code(), 422);
}

#[tokio::test]
async fn watchlist_analysis_returns_one_result_per_symbol() {
    let app = TestApiServer::new().await;
    app.watchlist.add("ETHUSDT").await;

    let response = app.server.get("/api/watchlist/analysis").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn watchlist_analysis_omits_failures() {
    // The mocked exchange serves too little history for every symbol, so the
    // batch completes with zero results instead of failing.
    let app = TestApiServer::with_candle_count(50).await;

    let response = app.server.get("/api/watchlist/analysis").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn top_performers_sorted_by_percentage() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/market/top-performers").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let performers = body.as_array().unwrap();
    assert_eq!(performers.len(), 3);
    assert_eq!(performers[0]["symbol"], "CCCUSDT");
    assert_eq!(performers[1]["symbol"], "AAAUSDT");
    assert_eq!(performers[2]["symbol"], "BBBUSDT");
}

#[tokio::test]
async fn fear_greed_endpoint_proxies_index() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/market/fear-greed").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["value"], 54);
    assert_eq!(body["classification"], "Neutral");
}
