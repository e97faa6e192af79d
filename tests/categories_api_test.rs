mod common;

use axum::http::{header, StatusCode};
use common::{body_json, TestApp};

/// Seed the standard tree used by the route tests:
///
/// hair-care -> shampoo -> anti-dandruff, plus a skincare root.
async fn seed_tree(app: &TestApp) {
    app.seed_category(1, "Hair Care", "hair-care", None, true)
        .await;
    app.seed_category(2, "Shampoo", "shampoo", Some(1), true)
        .await;
    app.seed_category(3, "Anti-Dandruff", "anti-dandruff", Some(2), true)
        .await;
    app.seed_category(4, "Skincare", "skincare", None, true)
        .await;
    app.seed_category(5, "Archive", "archive", None, false)
        .await;
}

#[tokio::test]
async fn catalog_landing_lists_active_roots() {
    let app = TestApp::new().await;
    seed_tree(&app).await;
    app.seed_product(1, "Mint Shampoo", 2).await;

    let response = app.get("/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let categories = body["categories"].as_array().expect("categories array");
    let slugs: Vec<&str> = categories
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["hair-care", "skincare"]);

    let products = body["products"].as_array().expect("products array");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Mint Shampoo");
}

#[tokio::test]
async fn category_page_returns_children_and_groups() {
    let app = TestApp::new().await;
    seed_tree(&app).await;

    let response = app.get("/api/v1/categories/hair-care").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["category"]["slug"], "hair-care");

    let children = body["children"].as_array().expect("children array");
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["slug"], "shampoo");

    // the grandchild surfaces in a parent-labelled group
    let groups = body["groups"].as_array().expect("groups array");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["parent"]["slug"], "shampoo");
    assert_eq!(groups[0]["children"][0]["slug"], "anti-dandruff");
}

#[tokio::test]
async fn unknown_category_returns_404_with_slug() {
    let app = TestApp::new().await;
    seed_tree(&app).await;

    let response = app.get("/api/v1/categories/garden").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains("garden"));
}

#[tokio::test]
async fn inactive_root_returns_404() {
    let app = TestApp::new().await;
    seed_tree(&app).await;

    let response = app.get("/api/v1/categories/archive").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn direct_subcategory_path_returns_page() {
    let app = TestApp::new().await;
    seed_tree(&app).await;
    app.seed_product(1, "Mint Shampoo", 2).await;

    let response = app.get("/api/v1/categories/hair-care/shampoo").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["category"]["slug"], "shampoo");
    assert_eq!(body["parent"]["slug"], "hair-care");
    assert_eq!(body["children"][0]["slug"], "anti-dandruff");
    assert_eq!(body["products"][0]["name"], "Mint Shampoo");
}

#[tokio::test]
async fn stale_path_returns_308_with_canonical_location() {
    let app = TestApp::new().await;
    seed_tree(&app).await;

    let response = app.get("/api/v1/categories/hair-care/anti-dandruff").await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect carries a Location header")
        .to_str()
        .unwrap();
    assert_eq!(
        location,
        "/api/v1/categories/hair-care/shampoo/anti-dandruff"
    );
}

#[tokio::test]
async fn subcategory_under_wrong_root_redirects_and_target_resolves() {
    let app = TestApp::new().await;
    seed_tree(&app).await;

    let response = app.get("/api/v1/categories/skincare/shampoo").await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect carries a Location header")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/api/v1/categories/hair-care/shampoo");

    // the canonical location answers 200, so the client never loops
    let followed = app.get(&location).await;
    assert_eq!(followed.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_subcategory_returns_404_naming_both_segments() {
    let app = TestApp::new().await;
    seed_tree(&app).await;

    let response = app.get("/api/v1/categories/hair-care/beard-oil").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("beard-oil"));
    assert!(message.contains("hair-care"));
}

#[tokio::test]
async fn status_endpoint_reports_ok() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/status").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["service"], "storefront-api");
}

#[tokio::test]
async fn health_endpoint_reports_database_check() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["checks"]["database"], "healthy");
}
