//! Handlers for the read-only product catalog.

use std::collections::HashMap;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use respond_core::envelope::{bad_request, not_found, not_implemented, ok, Data};
use respond_core::pagination::PageRequest;

use crate::catalog::{self, Product};
use crate::error::AppResult;
use crate::response::{self, ApiResponse};
use crate::state::AppState;

/// Fields exposed by list endpoints.
const LIST_FIELDS: &[&str] = &["id", "name", "price_cents"];
/// Fields exposed by the detail endpoint.
const DETAIL_FIELDS: &[&str] = &["id", "name", "price_cents", "stock"];

/// Number of suggestions returned by the typeahead endpoint.
const SUGGESTION_COUNT: i64 = 5;

/// GET /api/v1/products
///
/// Paginated listing. Honors `?page=` and `?page_size=`; malformed values
/// fall back to the defaults.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<ApiResponse> {
    response::page(
        &params,
        state.catalog.as_slice(),
        &PageRequest::new(),
        &state.paginator,
        LIST_FIELDS,
    )
}

/// GET /api/v1/products/suggest?q=
///
/// Always the first page of matches, whatever the query string says.
pub async fn suggest_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<ApiResponse> {
    let prefix = params.get("q").map(String::as_str).unwrap_or_default();
    let matches = catalog::search(&state.catalog, prefix);

    tracing::debug!(prefix, hits = matches.len(), "Product suggestions");

    response::page(
        &params,
        &matches,
        &PageRequest::new().page(1).page_size(SUGGESTION_COUNT),
        &state.paginator,
        LIST_FIELDS,
    )
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<ApiResponse> {
    let Path(id) = id.map_err(|rejection| bad_request().with_message(rejection.body_text()))?;

    let product: &Product = state
        .catalog
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found().with_message(format!("Product {id} not found")))?;

    Ok(ApiResponse(ok(Data::record(product), Some(DETAIL_FIELDS))?))
}

/// POST /api/v1/products
///
/// The catalog is read-only.
pub async fn create_product() -> ApiResponse {
    ApiResponse(not_implemented().with_message("the product catalog is read-only"))
}
