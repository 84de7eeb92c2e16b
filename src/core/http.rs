//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::metrics::Metrics;
use crate::services::binance::BinanceMarketDataProvider;
use crate::services::{FearGreedClient, MarketDataProvider};
use crate::watchlist::Watchlist;

const TOP_PERFORMERS_LIMIT: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub provider: Arc<dyn MarketDataProvider>,
    pub fear_greed: Arc<FearGreedClient>,
    pub watchlist: Watchlist,
    pub metrics: Arc<Metrics>,
    pub health: Arc<RwLock<HealthStatus>>,
    pub start_time: Arc<Instant>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "marketpulse-analysis-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Run a one-shot analysis for a symbol.
///
/// Every pipeline failure (fetch, insufficient history, computation) maps to
/// a no-result 404; the typed detail only reaches the logs.
async fn get_analysis(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let symbol = symbol.to_uppercase();
    state.metrics.analyses_total.inc();

    match state.analyzer.analyze(&symbol).await {
        Ok(result) => Ok(Json(json!(result))),
        Err(e) => {
            state.metrics.analyses_failed_total.inc();
            warn!(symbol = %symbol, error = %e, "analysis produced no result");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[derive(Debug, Deserialize)]
struct AddWatchlistRequest {
    symbol: String,
}

async fn list_watchlist(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let symbols = state.watchlist.symbols().await;
    Ok(Json(json!({ "symbols": symbols })))
}

async fn add_watchlist(
    State(state): State<AppState>,
    Json(request): Json<AddWatchlistRequest>,
) -> Result<Json<Value>, StatusCode> {
    let symbol = request.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let added = state.watchlist.add(&symbol).await;
    Ok(Json(json!({ "symbol": symbol, "added": added })))
}

async fn remove_watchlist(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let symbol = symbol.to_uppercase();
    if state.watchlist.remove(&symbol).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// Analyze every watchlist symbol sequentially, omitting failures.
async fn analyze_watchlist(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let results = state.analyzer.analyze_watchlist(&state.watchlist).await;
    Ok(Json(json!(results)))
}

/// Top symbols by 24h percentage change.
async fn top_performers(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let tickers = state.provider.fetch_tickers().await.map_err(|e| {
        warn!(error = %e, "failed to fetch tickers");
        StatusCode::BAD_GATEWAY
    })?;

    let mut performers: Vec<_> = tickers.into_values().collect();
    performers.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    performers.truncate(TOP_PERFORMERS_LIMIT);

    Ok(Json(json!(performers)))
}

async fn fear_greed(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let index = state.fear_greed.fetch().await.map_err(|e| {
        warn!(error = %e, "failed to fetch fear/greed index");
        StatusCode::BAD_GATEWAY
    })?;

    Ok(Json(json!(index)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analysis/{symbol}", get(get_analysis))
        .route("/api/watchlist", get(list_watchlist))
        .route("/api/watchlist", post(add_watchlist))
        .route("/api/watchlist/{symbol}", delete(remove_watchlist))
        .route("/api/watchlist/analysis", get(analyze_watchlist))
        .route("/api/market/top-performers", get(top_performers))
        .route("/api/market/fear-greed", get(fear_greed))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Build the full application state from configuration.
pub fn build_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let provider: Arc<dyn MarketDataProvider> = Arc::new(BinanceMarketDataProvider::new(
        config.exchange_base_url.clone(),
    ));
    let analyzer = Arc::new(Analyzer::new(
        provider.clone(),
        config.timeframe.clone(),
        config.candle_limit,
    ));
    let fear_greed = Arc::new(FearGreedClient::new(config.fear_greed_base_url.clone()));
    let watchlist = Watchlist::with_symbols(config.watchlist.iter().cloned());
    let metrics = Arc::new(Metrics::new()?);

    Ok(AppState {
        analyzer,
        provider,
        fear_greed,
        watchlist,
        metrics,
        health: Arc::new(RwLock::new(HealthStatus::default())),
        start_time: Arc::new(Instant::now()),
    })
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config)?;
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
