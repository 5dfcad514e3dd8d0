//! # Example Endpoint
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/example/` | `get_example` |

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Payload of the example resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExampleItem {
    pub message: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/example/", get(get_example))
}

/// Get example
///
/// `GET /example/` returns a fixed greeting.
#[utoipa::path(
    get,
    path = "/example/",
    operation_id = "get_example",
    responses(
        (status = 200, description = "Example payload", body = ExampleItem),
    ),
    tag = "Example"
)]
pub(crate) async fn get_example() -> Json<ExampleItem> {
    Json(ExampleItem {
        message: "Hello world".to_string(),
    })
}
