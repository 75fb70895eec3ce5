#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use respond_api::catalog;
use respond_api::config::ServerConfig;
use respond_api::router::build_app_router;
use respond_api::state::AppState;
use respond_core::pagination::PaginationConfig;

/// Products seeded into every test app.
pub const CATALOG_SIZE: usize = 25;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        pagination: PaginationConfig::default(),
    }
}

/// Build the full application router over a seeded catalog of
/// [`CATALOG_SIZE`] products, using the default pagination limits.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config(), CATALOG_SIZE)
}

/// Build the full application router with a custom config and catalog size.
///
/// Uses the same router construction as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with(config: ServerConfig, catalog_size: usize) -> Router {
    build_app_router(AppState::new(config, catalog::seed(catalog_size)))
}

/// Send a request with the given method and empty body.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
