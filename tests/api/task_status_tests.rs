//! Task Status API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn list_returns_default_statuses() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/task_statuses").await;

    response.assert_status_ok();
    assert_eq!(response.header("x-total-count"), "5");
    let slugs: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|s| s["slug"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        slugs,
        vec!["draft", "to_review", "to_be_fixed", "to_publish", "published"]
    );
}

#[tokio::test]
async fn create_task_status() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/task_statuses")
        .json(&json!({ "name": "Archived", "slug": "archived" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Archived");
    assert_eq!(body["slug"], "archived");
}

#[tokio::test]
async fn create_with_taken_slug_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/task_statuses")
        .json(&json!({ "name": "Another draft", "slug": "draft" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "slug");
}

#[tokio::test]
async fn create_with_blank_fields_reports_both() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/task_statuses")
        .json(&json!({ "name": "", "slug": " " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"].as_array().unwrap().len(),
        2
    );
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = TestApp::spawn().await;
    let id = app.db.status_id("to_review");

    let response = app
        .put(&format!("/api/task_statuses/{id}"))
        .json(&json!({ "name": "Needs review" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Needs review");
    assert_eq!(body["slug"], "to_review");
}

#[tokio::test]
async fn update_with_null_slug_is_rejected() {
    let app = TestApp::spawn().await;
    let id = app.db.status_id("draft");

    app.put(&format!("/api/task_statuses/{id}"))
        .json(&json!({ "slug": null }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_status_in_use_conflicts() {
    let app = TestApp::spawn().await;
    let id = app.db.status_id("draft");
    app.post("/api/tasks")
        .json(&json!({ "title": "Write docs", "status": "draft" }))
        .await
        .assert_status(StatusCode::CREATED);

    app.delete(&format!("/api/task_statuses/{id}"))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_missing_status_is_not_found() {
    let app = TestApp::spawn().await;

    app.delete("/api/task_statuses/999")
        .await
        .assert_status_not_found();
}
