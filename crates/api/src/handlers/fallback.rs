//! Envelope responses for requests no handler accepted.

use std::any::Any;

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use respond_core::envelope::{
    internal_server_error, invalid_endpoint, method_not_allowed, request_timeout,
};

use crate::response::ApiResponse;

/// Any path that matched no route.
pub async fn unknown_route(uri: Uri) -> ApiResponse {
    tracing::debug!(%uri, "No route matched");
    ApiResponse(invalid_endpoint())
}

/// A known path requested with an unsupported method.
pub async fn unsupported_method() -> ApiResponse {
    ApiResponse(method_not_allowed())
}

/// Replace the timeout layer's bodiless 408 with the `request_timeout`
/// envelope. Every other response passes through untouched.
pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    tracing::warn!("Request timed out");
    ApiResponse(request_timeout()).into_response()
}

/// Response used by the panic-recovery layer.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Handler panicked");

    ApiResponse(internal_server_error()).into_response()
}
