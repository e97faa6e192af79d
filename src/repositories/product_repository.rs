use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::product::{Column, Entity as Product, Model as ProductModel};
use crate::errors::ServiceError;
use crate::repositories::{BaseRepository, ProductStore, Repository};

/// sea-orm backed product store.
#[derive(Debug)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_by_category_id(
        &self,
        category_id: i32,
    ) -> Result<Vec<ProductModel>, ServiceError> {
        Product::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::CategoryId.eq(category_id))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::from)
    }

    async fn find_all_active(&self) -> Result<Vec<ProductModel>, ServiceError> {
        Product::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::from)
    }
}

impl Repository for ProductRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
