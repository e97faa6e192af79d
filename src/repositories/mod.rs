use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::entities::{CategoryModel, ProductModel};
use crate::errors::ServiceError;

pub mod category_repository;
pub mod product_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;

/// Read-side category store. Every method sees only active rows; a
/// soft-deleted category is invisible here even though it still exists in
/// storage. Implemented by the sea-orm repository in production and by
/// in-memory fakes in tests, so consumers take these as explicit
/// dependencies rather than reaching into a global container.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Active category with the given slug under `parent_id`
    /// (`None` = root scope). Slugs are unique within one parent scope.
    async fn find_by_slug_and_parent(
        &self,
        slug: &str,
        parent_id: Option<i32>,
    ) -> Result<Option<CategoryModel>, ServiceError>;

    /// Every active category with the given slug, anywhere in the tree,
    /// ordered by id.
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<CategoryModel>, ServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, ServiceError>;

    /// Active children of `parent_id`, ordered by sort order then name.
    async fn find_children(&self, parent_id: i32) -> Result<Vec<CategoryModel>, ServiceError>;

    /// The whole active category set in one round-trip; the traversal core
    /// indexes this instead of querying per tree level.
    async fn find_all_active(&self) -> Result<Vec<CategoryModel>, ServiceError>;
}

/// Read-side product store.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Active products assigned directly to the category (no subtree
    /// aggregation), ordered by name then id. Empty is a valid result.
    async fn find_by_category_id(
        &self,
        category_id: i32,
    ) -> Result<Vec<ProductModel>, ServiceError>;

    async fn find_all_active(&self) -> Result<Vec<ProductModel>, ServiceError>;
}

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
