//! HTTP rendering of response envelopes.
//!
//! Handlers build an [`Envelope`] with the `respond_core::envelope`
//! builders and return it wrapped in [`ApiResponse`]. Paginated listings
//! go through [`page`], which resolves the window, projects each record,
//! and attaches the pagination descriptor.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use respond_core::envelope::{ok, Envelope};
use respond_core::pagination::{Collection, PageRequest, Paginator};
use respond_core::params::ParamSource;
use respond_core::projection::{project_all, Record};
use serde_json::Value;

use crate::error::AppResult;

/// An [`Envelope`] sent with the HTTP status it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(pub Envelope);

impl From<Envelope> for ApiResponse {
    fn from(envelope: Envelope) -> Self {
        ApiResponse(envelope)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}

/// Paginate `collection` and answer with the projected page.
///
/// `params` are the raw query parameters (`page`, `page_size`); values in
/// `request` take precedence over them. Each item is projected onto
/// `fields`, so an unknown field name fails the request.
pub fn page<'a, C, R, P>(
    params: &P,
    collection: C,
    request: &PageRequest,
    paginator: &Paginator,
    fields: &[&str],
) -> AppResult<ApiResponse>
where
    C: Collection<Item = &'a R>,
    R: Record + 'a,
    P: ParamSource + ?Sized,
{
    let page = paginator.paginate(collection, request, params)?;
    let items = project_all(page.items, fields)?;

    let envelope = ok(Value::Array(items).into(), None)?.with_pagination(page.pagination);
    Ok(ApiResponse(envelope))
}
