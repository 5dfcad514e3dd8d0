//! UI gateway service entry point.
//!
//! Reads configuration from the environment, initializes tracing, and
//! serves the router from [`uigw_api::app`] until the process is stopped.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use uigw_api::services::logs::LogsService;
use uigw_api::state::LogFormat;
use uigw_api::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::with_config(config, LogsService::stub());
    let app = uigw_api::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("uigw-api listening on {addr}");

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
