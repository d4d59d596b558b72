//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use qcdocs_core::config::AppConfig;
use qcdocs_core::traits::store::ObjectStore;
use qcdocs_service::SearchService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Backing object store.
    pub store: Arc<dyn ObjectStore>,
    /// Category search service.
    pub search: Arc<SearchService>,
}

impl AppState {
    /// Assemble state around a store, with the fixed QC category layout.
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn ObjectStore>) -> Self {
        let search = Arc::new(SearchService::with_default_categories(Arc::clone(&store)));
        Self {
            config,
            store,
            search,
        }
    }
}
