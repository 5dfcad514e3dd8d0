//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`. This document is the input the client
//! generator turns into the Python client.

use std::sync::OnceLock;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "UI gateway service",
        version = "0.0.0",
        description = "An intermediary component between Glaciation Frontend and Metadata Service. The service adapts user interface queries into a series of SPARQL requests to MetadataService and telemetry requests from Storage Service. The service also checking user permissions via oauth server and filters the KGs that a user is not allowed to access.",
        contact(name = "HIRO-MicroDataCenters", email = "all-hiro@hiro-microdatacenters.nl"),
        license(name = "MIT", url = "https://github.com/glaciation-heu/ui_gateway/blob/main/LICENSE")
    ),
    paths(
        crate::routes::example::get_example,
        crate::routes::logs::get_logs_list,
    ),
    components(
        schemas(
            crate::routes::example::ExampleItem,
            uigw_core::LogsItem,
            uigw_core::Level,
            uigw_core::ObjectType,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
        ),
    ),
    tags(
        (name = "Example", description = "Template resource"),
        (name = "Logs", description = "Log entries about infrastructure objects"),
    )
)]
pub struct ApiDoc;

static SPEC: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();

/// The generated spec, built on first use.
pub fn spec() -> &'static utoipa::openapi::OpenApi {
    SPEC.get_or_init(ApiDoc::openapi)
}

/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(spec().clone())
}
