use std::sync::Arc;

use tiendita_catalog::{CatalogStore, ItemRegistry, QueryService};

/// Application services shared by all request handlers.
#[derive(Debug)]
pub struct AppServices {
    queries: QueryService,
}

impl AppServices {
    pub fn queries(&self) -> &QueryService {
        &self.queries
    }
}

/// Build the process-wide stores and wire the query service over them.
///
/// The seed catalog and the registry slot live for the process duration;
/// nothing is persisted.
pub fn build_services() -> AppServices {
    let catalog = Arc::new(CatalogStore::with_seed());
    let registry = Arc::new(ItemRegistry::new());

    AppServices {
        queries: QueryService::new(catalog, registry),
    }
}
