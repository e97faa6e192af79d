/// Catalog services module - storefront read-side business logic
pub mod catalog;

// Re-export services for convenience
pub use catalog::{CatalogLanding, CatalogService, CategoryPage};
