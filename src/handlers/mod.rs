pub mod categories;
pub mod common;

use std::sync::Arc;

use crate::db::DbPool;
use crate::repositories::{CategoryRepository, ProductRepository};
use crate::services::CatalogService;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
}

impl AppServices {
    /// Wire the catalog service to the sea-orm backed stores.
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        let catalog = Arc::new(CatalogService::new(
            Arc::new(CategoryRepository::new(db_pool.clone())),
            Arc::new(ProductRepository::new(db_pool)),
        ));

        Self { catalog }
    }

    /// Build services directly from store implementations; used by tests
    /// to substitute in-memory fakes.
    pub fn with_stores(
        categories: Arc<dyn crate::repositories::CategoryStore>,
        products: Arc<dyn crate::repositories::ProductStore>,
    ) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(categories, products)),
        }
    }
}
