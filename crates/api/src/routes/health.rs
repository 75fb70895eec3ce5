use axum::extract::State;
use axum::{routing::get, Router};
use respond_core::envelope::{ok, Data};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of products served by the catalog routes.
    pub catalog_size: usize,
}

/// GET /health -- returns service health inside the standard envelope.
async fn health_check(State(state): State<AppState>) -> AppResult<ApiResponse> {
    let health = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog_size: state.catalog.len(),
    };

    Ok(ApiResponse(ok(Data::json(&health)?, None)?))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
