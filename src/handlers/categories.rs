use crate::catalog::{ChildGroup, PathSegment, Resolution};
use crate::entities::{CategoryModel, ProductModel};
use crate::handlers::common::{map_service_error, success_response};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// Creates the router for public catalog endpoints
pub fn categories_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_catalog))
        .route("/:slug", get(get_category))
        .route("/:slug/:subcategory_slug", get(resolve_subcategory))
}

/// List root categories and the flat product list
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Catalog landing data", body = CatalogResponse),
        (status = 503, description = "Catalog store unavailable", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_catalog(State(state): State<AppState>) -> Result<Response, ApiError> {
    let landing = state
        .services
        .catalog
        .landing()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(CatalogResponse {
        categories: landing
            .categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect(),
        products: landing
            .products
            .into_iter()
            .map(ProductResponse::from)
            .collect(),
    }))
}

/// Get a root category page by slug
#[utoipa::path(
    get,
    path = "/api/v1/categories/:slug",
    params(
        ("slug" = String, Path, description = "Root category slug")
    ),
    responses(
        (status = 200, description = "Category page data", body = CategoryPageResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse),
        (status = 503, description = "Catalog store unavailable", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let page = state
        .services
        .catalog
        .category_page(&slug)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(CategoryPageResponse {
        category: page.category.into(),
        children: page
            .children
            .into_iter()
            .map(CategoryResponse::from)
            .collect(),
        groups: page.groups.into_iter().map(GroupResponse::from).collect(),
        products: page
            .products
            .into_iter()
            .map(ProductResponse::from)
            .collect(),
    }))
}

/// Resolve a two-segment category path
///
/// The tree can be deeper than the two URL segments; stale paths are
/// answered with a server-side redirect to the canonical location.
#[utoipa::path(
    get,
    path = "/api/v1/categories/:slug/:subcategory_slug",
    params(
        ("slug" = String, Path, description = "Root category slug"),
        ("subcategory_slug" = String, Path, description = "Subcategory slug")
    ),
    responses(
        (status = 200, description = "Resolved subcategory page", body = SubcategoryPageResponse),
        (status = 308, description = "Stale path; Location carries the canonical category path"),
        (status = 404, description = "Category or subcategory not found", body = crate::errors::ErrorResponse),
        (status = 503, description = "Catalog store unavailable", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn resolve_subcategory(
    State(state): State<AppState>,
    Path((slug, subcategory_slug)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let resolution = state
        .services
        .catalog
        .resolve_subcategory(&slug, &subcategory_slug)
        .await
        .map_err(map_service_error)?;

    match resolution {
        Resolution::Resolved {
            category,
            parent,
            children,
        } => {
            let products = state
                .services
                .catalog
                .products_for(category.id)
                .await
                .map_err(map_service_error)?;

            Ok(success_response(SubcategoryPageResponse {
                category: category.into(),
                parent: parent.into(),
                children: children.into_iter().map(CategoryResponse::from).collect(),
                products: products.into_iter().map(ProductResponse::from).collect(),
            }))
        }
        Resolution::Redirect { canonical_path } => {
            // The resolver's canonical path is route-agnostic slugs only;
            // re-anchor it under this API's category mount.
            let location = format!("/api/v1/categories{}", canonical_path);
            Ok(Redirect::permanent(&location).into_response())
        }
        Resolution::NotFound { segment } => Err(ApiError::NotFound(match segment {
            PathSegment::Category => format!("Category '{}' not found", slug),
            PathSegment::Subcategory => format!(
                "Subcategory '{}' not found under '{}'",
                subcategory_slug, slug
            ),
        })),
    }
}

// Response DTOs

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Hair Care",
    "slug": "hair-care",
    "parent_id": null,
    "sort_order": 0,
    "meta_title": "Hair Care Products",
    "meta_description": "Shampoos, conditioners and treatments."
}))]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

impl From<CategoryModel> for CategoryResponse {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            parent_id: model.parent_id,
            sort_order: model.sort_order,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    #[schema(example = "149.99")]
    pub price: Decimal,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ProductModel> for ProductResponse {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            price: model.price,
            category_id: model.category_id,
            created_at: model.created_at,
        }
    }
}

/// One parent-labelled group of deeper-level categories
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupResponse {
    pub parent: CategoryResponse,
    pub children: Vec<CategoryResponse>,
}

impl From<ChildGroup> for GroupResponse {
    fn from(group: ChildGroup) -> Self {
        Self {
            parent: group.parent.into(),
            children: group.children.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub categories: Vec<CategoryResponse>,
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryPageResponse {
    pub category: CategoryResponse,
    pub children: Vec<CategoryResponse>,
    pub groups: Vec<GroupResponse>,
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubcategoryPageResponse {
    pub category: CategoryResponse,
    pub parent: CategoryResponse,
    pub children: Vec<CategoryResponse>,
    pub products: Vec<ProductResponse>,
}
