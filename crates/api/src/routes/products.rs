//! Route definitions for the product catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET    /            -> list_products   (paginated)
/// POST   /            -> create_product  (not implemented)
/// GET    /suggest     -> suggest_products (first page only)
/// GET    /{id}        -> get_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/suggest", get(products::suggest_products))
        .route("/{id}", get(products::get_product))
}
