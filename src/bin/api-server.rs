//! Marketpulse API Server
//!
//! HTTP API server exposing one-shot symbol analysis, watchlist management
//! and market overview endpoints. Stateless apart from the in-process
//! watchlist; can be restarted freely.

use dotenvy::dotenv;
use marketpulse::config::{get_environment, Config};
use marketpulse::core::http::start_server;
use marketpulse::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env();
    let env = get_environment();
    info!("Starting Marketpulse API Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(
        timeframe = %config.timeframe,
        candle_limit = config.candle_limit,
        watchlist = ?config.watchlist,
        "Analysis configuration"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
