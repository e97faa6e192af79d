use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use storefront_api::{
    config::AppConfig,
    db,
    entities::{category, product},
    handlers::AppServices,
    AppState,
};
use tower::ServiceExt;

/// Helper harness for spinning up an application state backed by an
/// in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        // Minimal configuration suitable for tests. A single pooled
        // connection keeps the in-memory database alive and shared.
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db_arc = Arc::new(pool);
        let services = AppServices::new(db_arc.clone());

        let state = AppState {
            db: db_arc,
            config: cfg,
            services,
        };

        let router = Router::new()
            .nest("/api/v1", storefront_api::api_v1_routes())
            .with_state(state.clone());

        Self { router, state }
    }

    /// Send a GET request against the router.
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request should not fail at the transport level")
    }

    /// Insert a category row and return its id.
    pub async fn seed_category(
        &self,
        id: i32,
        name: &str,
        slug: &str,
        parent_id: Option<i32>,
        is_active: bool,
    ) -> i32 {
        let row = category::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            slug: Set(slug.to_string()),
            parent_id: Set(parent_id),
            sort_order: Set(0),
            is_active: Set(is_active),
            meta_title: Set(None),
            meta_description: Set(None),
        };
        row.insert(&*self.state.db)
            .await
            .expect("failed to seed category");
        id
    }

    /// Insert a product row under the given category.
    #[allow(dead_code)]
    pub async fn seed_product(&self, id: i32, name: &str, category_id: i32) {
        let row = product::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            slug: Set(name.to_lowercase().replace(' ', "-")),
            price: Set(rust_decimal_macros::dec!(9.99)),
            category_id: Set(category_id),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now()),
        };
        row.insert(&*self.state.db)
            .await
            .expect("failed to seed product");
    }
}

/// Read a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
