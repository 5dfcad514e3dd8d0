//! # Logs Endpoint
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/logs/` | `get_logs_list` |
//!
//! Pagination, search, and filtering belong to the telemetry backend
//! contract and are not accepted here yet.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use uigw_core::LogsItem;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/logs/", get(get_logs_list))
}

/// Get a list of logs
///
/// `GET /logs/` returns log entries in the order the backend reports them.
#[utoipa::path(
    get,
    path = "/logs/",
    operation_id = "get_logs_list",
    responses(
        (status = 200, description = "Log entries", body = [LogsItem]),
        (status = 502, description = "Log backend failed", body = crate::error::ErrorBody),
    ),
    tag = "Logs"
)]
pub(crate) async fn get_logs_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<LogsItem>>, AppError> {
    let items = state.logs.get_list()?;
    Ok(Json(items))
}
