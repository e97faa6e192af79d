use std::sync::Arc;

use tracing::{info, instrument};

use crate::catalog::{resolver, tree, CategoryIndex, ChildGroup, Resolution};
use crate::entities::{CategoryModel, ProductModel};
use crate::errors::ServiceError;
use crate::repositories::{CategoryStore, ProductStore};

/// Landing view: all root categories plus the flat product list.
#[derive(Debug)]
pub struct CatalogLanding {
    pub categories: Vec<CategoryModel>,
    pub products: Vec<ProductModel>,
}

/// One root category page: its ordered children, the branch's deeper
/// descendants grouped under their parents (for mixed-level sidebars),
/// and the products assigned directly to the root.
#[derive(Debug)]
pub struct CategoryPage {
    pub category: CategoryModel,
    pub children: Vec<CategoryModel>,
    pub groups: Vec<ChildGroup>,
    pub products: Vec<ProductModel>,
}

/// Catalog read service. Receives its stores as explicit dependencies so
/// it can be exercised against in-memory fakes.
#[derive(Clone)]
pub struct CatalogService {
    categories: Arc<dyn CategoryStore>,
    products: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(categories: Arc<dyn CategoryStore>, products: Arc<dyn ProductStore>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Root categories and the flat product list for the landing route.
    #[instrument(skip(self))]
    pub async fn landing(&self) -> Result<CatalogLanding, ServiceError> {
        let all = self.categories.find_all_active().await?;
        let products = self.products.find_all_active().await?;
        Ok(CatalogLanding {
            categories: tree::root_categories(&all),
            products,
        })
    }

    /// Page data for one root category, or `NotFound` when no active root
    /// carries the slug.
    #[instrument(skip(self))]
    pub async fn category_page(&self, slug: &str) -> Result<CategoryPage, ServiceError> {
        let category = self
            .categories
            .find_by_slug_and_parent(slug, None)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category '{}' not found", slug)))?;

        let children = self.categories.find_children(category.id).await?;

        // Deeper levels of this branch, grouped under their parents so a
        // sidebar can render them as parent-labelled sections.
        let index = CategoryIndex::build(self.categories.find_all_active().await?);
        let descendants = index.descendants_of(category.id);
        let groups: Vec<ChildGroup> = tree::group_children_by_parent(&descendants)
            .into_values()
            .collect();

        let products = self.products.find_by_category_id(category.id).await?;

        Ok(CategoryPage {
            category,
            children,
            groups,
            products,
        })
    }

    /// Runs the slug path resolver for a two-segment route. One store
    /// round-trip: the whole active set is fetched and indexed, then
    /// resolution is pure.
    #[instrument(skip(self))]
    pub async fn resolve_subcategory(
        &self,
        category_slug: &str,
        subcategory_slug: &str,
    ) -> Result<Resolution, ServiceError> {
        let index = CategoryIndex::build(self.categories.find_all_active().await?);
        let resolution = resolver::resolve_path(&index, category_slug, subcategory_slug);

        if let Resolution::Redirect { canonical_path } = &resolution {
            info!(
                category_slug,
                subcategory_slug, canonical_path, "stale path, canonical redirect computed"
            );
        }
        Ok(resolution)
    }

    /// Products assigned directly to the category; verifies the category
    /// is still active before listing. Empty is a valid, non-error result.
    #[instrument(skip(self))]
    pub async fn products_for(&self, category_id: i32) -> Result<Vec<ProductModel>, ServiceError> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Category {} not found", category_id))
            })?;

        self.products.find_by_category_id(category_id).await
    }

    /// Convenience used by tests and diagnostics: all ambiguous matches
    /// for a slug across branches, in fetch order.
    pub async fn categories_by_slug(
        &self,
        slug: &str,
    ) -> Result<Vec<CategoryModel>, ServiceError> {
        self.categories.find_by_slug(slug).await
    }
}
