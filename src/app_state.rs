use std::sync::Arc;

use crate::services::catalog::CatalogProvider;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    pub fn new(catalog: impl CatalogProvider + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
