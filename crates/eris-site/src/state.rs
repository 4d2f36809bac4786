//! Application state shared across request handlers.

use eris_catalog::Catalog;
use eris_config::ConfigCache;
use std::sync::Arc;

/// Shared state for the HTTP layer.
///
/// Initialized once during startup and cloned per request through axum's
/// state extraction; both fields are reference-counted, so clones are cheap.
/// The catalog is immutable for the life of the process, the configuration
/// is read through its atomically swappable cache.
#[derive(Clone)]
pub struct AppState {
    /// Active site configuration, constructed explicitly at startup.
    pub config: Arc<ConfigCache>,
    /// The command catalog backing the reference page.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates the application state from a loaded configuration cache and
    /// catalog.
    pub fn new(config: ConfigCache, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
