// tests/error_tests.rs

mod common;

use common::{assert_error_contract, spawn_app};
use serde_json::json;

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.url("/random_path_that_does_not_exist"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_error_contract(response, 404, "Resource not found").await;
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client.put(app.url("/categories")).send().await.unwrap();

    assert_error_contract(response, 405, "Method not allowed").await;
}

#[tokio::test]
async fn get_on_quizzes_is_not_allowed() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client.get(app.url("/quizzes")).send().await.unwrap();

    assert_error_contract(response, 405, "Method not allowed").await;
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.url("/categories"))
        .header("Content-Type", "application/json")
        .body("{\"type\": ")
        .send()
        .await
        .unwrap();

    assert_error_contract(response, 400, "Bad request").await;
}

#[tokio::test]
async fn wrongly_typed_field_is_bad_request() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.url("/categories"))
        .json(&json!({"type": 7}))
        .send()
        .await
        .unwrap();

    assert_error_contract(response, 400, "Bad request").await;
}

#[tokio::test]
async fn blank_category_type_is_unprocessable() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.url("/categories"))
        .json(&json!({"type": ""}))
        .send()
        .await
        .unwrap();

    assert_error_contract(response, 422, "Unprocessable").await;
}

#[tokio::test]
async fn database_failure_is_internal_error() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    sqlx::query("DROP TABLE categories")
        .execute(&app.pool)
        .await
        .unwrap();

    let response = client.get(app.url("/categories")).send().await.unwrap();

    assert_error_contract(response, 500, "Internal server error").await;
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.url("/categories"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_preflight_lists_allowed_methods() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, app.url("/questions/1"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "content-type, authorization")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(methods.contains("DELETE"));
    assert!(methods.contains("PATCH"));

    let headers = response
        .headers()
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_lowercase();
    assert!(headers.contains("content-type"));
    assert!(headers.contains("authorization"));
}
