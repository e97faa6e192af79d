use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront Catalog API",
        version = "1.0.0",
        description = r#"
# Storefront Catalog API

Read-side catalog API for a storefront: hierarchical category browsing,
two-segment slug path resolution, and per-category product listings.

## Category paths

Public category routes carry at most two slugs while the category tree can
nest arbitrarily deep. When a requested path skips intermediate levels the
API answers with a `308` redirect whose `Location` header carries the
canonical root-to-category path.

## Error Handling

Failing endpoints return a consistent JSON error payload:

```json
{
  "error": "Not Found",
  "message": "Subcategory 'anti-dandruff' not found under 'hair-care'",
  "timestamp": "2026-01-09T10:30:00.000Z"
}
```

A `503` means the catalog store did not respond; it is never used for a
missing category.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Catalog", description = "Category browsing and path resolution"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::categories::list_catalog,
        crate::handlers::categories::get_category,
        crate::handlers::categories::resolve_subcategory,
    ),
    components(
        schemas(
            crate::handlers::categories::CategoryResponse,
            crate::handlers::categories::ProductResponse,
            crate::handlers::categories::GroupResponse,
            crate::handlers::categories::CatalogResponse,
            crate::handlers::categories::CategoryPageResponse,
            crate::handlers::categories::SubcategoryPageResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
