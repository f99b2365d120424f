/// Shared application state
use airwave_catalog::CatalogClient;
use airwave_core::PlayHistory;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub history: Arc<dyn PlayHistory>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogClient>, history: Arc<dyn PlayHistory>) -> Self {
        Self { catalog, history }
    }
}
