use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::category::{Column, Entity as Category, Model as CategoryModel};
use crate::errors::ServiceError;
use crate::repositories::{BaseRepository, CategoryStore, Repository};

/// sea-orm backed category store. All queries filter `is_active` so
/// soft-deleted rows never leak into traversal or lookup.
#[derive(Debug)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn find_by_slug_and_parent(
        &self,
        slug: &str,
        parent_id: Option<i32>,
    ) -> Result<Option<CategoryModel>, ServiceError> {
        let parent_filter = match parent_id {
            Some(id) => Column::ParentId.eq(id),
            None => Column::ParentId.is_null(),
        };

        Category::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Slug.eq(slug))
            .filter(parent_filter)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::from)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<CategoryModel>, ServiceError> {
        Category::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Slug.eq(slug))
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::from)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, ServiceError> {
        Category::find_by_id(id)
            .filter(Column::IsActive.eq(true))
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::from)
    }

    async fn find_children(&self, parent_id: i32) -> Result<Vec<CategoryModel>, ServiceError> {
        Category::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::ParentId.eq(parent_id))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::from)
    }

    async fn find_all_active(&self) -> Result<Vec<CategoryModel>, ServiceError> {
        Category::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::from)
    }
}

impl Repository for CategoryRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
