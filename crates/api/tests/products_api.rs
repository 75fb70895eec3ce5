//! Integration tests for the product catalog endpoints.
//!
//! The test catalog holds 25 products with ids 1..=25, so the default page
//! size of 10 yields three pages.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send};
use respond_core::pagination::{PaginationConfig, RecordLimit};
use serde_json::json;

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_defaults_to_first_page_of_ten() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/products").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["code"], "OK");
    assert_eq!(json["message"], "ok");
    assert_eq!(ids(&json), (1..=10).collect::<Vec<_>>());
    assert_eq!(
        json["pagination"],
        json!({
            "total": 25,
            "page": 1,
            "page_size": 10,
            "last_page": 3,
            "from": 1,
            "to": 10,
        })
    );
}

#[tokio::test]
async fn list_projects_only_public_fields() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/products?page_size=1").await).await;

    let item = json["data"][0].as_object().unwrap();
    let mut keys: Vec<_> = item.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "name", "price_cents"]);
}

#[tokio::test]
async fn list_honors_page_query_parameters() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/products?page=3&page_size=10").await).await;

    assert_eq!(ids(&json), (21..=25).collect::<Vec<_>>());
    assert_eq!(json["pagination"]["from"], 21);
    assert_eq!(json["pagination"]["to"], 25);
}

#[tokio::test]
async fn malformed_page_falls_back_to_first_page() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/products?page=abc").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(ids(&json)[0], 1);
}

#[tokio::test]
async fn oversized_page_size_is_clamped_silently() {
    let app = common::build_test_app_with(common::test_config(), 120);
    let json = body_json(get(app, "/api/v1/products?page_size=999").await).await;

    assert_eq!(json["pagination"]["page_size"], 50);
    assert_eq!(ids(&json).len(), 50);
}

#[tokio::test]
async fn page_past_the_end_returns_last_page() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/products?page=40").await).await;

    assert_eq!(json["pagination"]["page"], 3);
    assert_eq!(ids(&json), (21..=25).collect::<Vec<_>>());
}

#[tokio::test]
async fn record_cap_redirects_deep_pages() {
    let mut config = common::test_config();
    config.pagination = PaginationConfig {
        max_page_size: 10,
        max_records: RecordLimit::AtMost(20),
        ..PaginationConfig::default()
    };
    let app = common::build_test_app_with(config, 100);

    let json = body_json(get(app, "/api/v1/products?page=5&page_size=10").await).await;

    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["total"], 100);
    assert_eq!(ids(&json), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn empty_catalog_returns_empty_page() {
    let app = common::build_test_app_with(common::test_config(), 0);
    let json = body_json(get(app, "/api/v1/products").await).await;

    assert_eq!(json["data"], json!([]));
    assert_eq!(json["pagination"]["total"], 0);
    assert_eq!(json["pagination"]["last_page"], 1);
    assert_eq!(json["pagination"]["from"], 0);
    assert_eq!(json["pagination"]["to"], 0);
}

#[tokio::test]
async fn strict_mode_rejects_malformed_parameters() {
    let mut config = common::test_config();
    config.pagination.raise_on_value_error = true;
    let app = common::build_test_app_with(config, 25);

    let response = get(app, "/api/v1/products?page_size=ten").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("page_size"));
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn suggestions_ignore_requested_page() {
    let app = common::build_test_app_with(common::test_config(), 60);
    let json = body_json(get(app, "/api/v1/products/suggest?q=compact&page=4&page_size=50").await).await;

    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 5);

    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 5);
    assert!(names.iter().all(|name| name.starts_with("Compact")));
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_product_returns_projected_record() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/products/7").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 7);
    assert!(json["data"]["stock"].is_number());
    assert!(json["data"].get("supplier_cost_cents").is_none());
    assert!(json.get("pagination").is_none());
}

#[tokio::test]
async fn missing_product_returns_not_found_envelope() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/products/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Product 999 not found");
    assert_eq!(json["data"], serde_json::Value::Null);
}

#[tokio::test]
async fn non_numeric_product_id_returns_bad_request() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/products/seven").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_product_is_not_implemented() {
    let app = common::build_test_app();
    let response = send(app, Method::POST, "/api/v1/products").await;

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_json(response).await["code"], "NOT_IMPLEMENTED");
}
