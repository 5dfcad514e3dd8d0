//! # uigw-api: Axum API Service for the UI Gateway
//!
//! The gateway sits between the frontend and the metadata/telemetry
//! services. This crate exposes the REST surface the frontend talks to;
//! data currently comes from in-memory stubs.
//!
//! ## API Surface
//!
//! | Path                 | Module                  |
//! |----------------------|-------------------------|
//! | `/example/`          | [`routes::example`]     |
//! | `/logs/`             | [`routes::logs`]        |
//! | `/openapi.json`      | [`openapi`]             |
//! | `/metrics`           | [`middleware::metrics`] |
//! | `/health/*`          | this module             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod state;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::GatewayMetrics;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(routes::example::router())
        .merge(routes::logs::router())
        .merge(openapi::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .fallback(not_found);

    if state.config.metrics_enabled {
        router = router
            .route("/metrics", get(prometheus_metrics))
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(GatewayMetrics::new()));
    } else {
        tracing::info!("metrics disabled; /metrics not mounted");
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /metrics: Prometheus metrics scrape endpoint.
async fn prometheus_metrics(Extension(metrics): Extension<GatewayMetrics>) -> impl IntoResponse {
    match metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => AppError::Internal(format!("failed to encode metrics: {e}")).into_response(),
    }
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 "ready" once the log backend can answer.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if !state.logs.is_ready() {
        tracing::warn!("log source not ready");
        return (StatusCode::SERVICE_UNAVAILABLE, "log source not ready").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}

async fn not_found(request: Request) -> AppError {
    AppError::NotFound(request.uri().path().to_string())
}
