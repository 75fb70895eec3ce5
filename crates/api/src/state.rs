use std::sync::Arc;

use respond_core::pagination::Paginator;

use crate::catalog::Product;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Paginator built from `config.pagination`.
    pub paginator: Arc<Paginator>,
    /// Read-only product catalog.
    pub catalog: Arc<Vec<Product>>,
}

impl AppState {
    pub fn new(config: ServerConfig, catalog: Vec<Product>) -> Self {
        let paginator = Paginator::new(config.pagination.clone());
        Self {
            config: Arc::new(config),
            paginator: Arc::new(paginator),
            catalog: Arc::new(catalog),
        }
    }
}
