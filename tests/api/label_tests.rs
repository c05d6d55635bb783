//! Label API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::TestApp;

#[tokio::test]
async fn list_returns_seeded_labels_with_total() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/labels").await;

    response.assert_status_ok();
    assert_eq!(response.header("x-total-count"), "2");
    let names: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|l| l["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["bug", "feature"]);
}

#[tokio::test]
async fn create_then_fetch_label() {
    let app = TestApp::spawn().await;

    let created = app
        .post("/api/labels")
        .json(&json!({ "name": "urgent" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body = created.json::<Value>();
    assert_eq!(body["name"], "urgent");
    assert!(body["createdAt"].is_string());

    let fetched = app.get(&format!("/api/labels/{}", body["id"])).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), body);
}

#[test_case(json!({ "name": "ab" }) ; "too short")]
#[test_case(json!({ "name": "   " }) ; "blank")]
#[test_case(json!({ "name": "bug" }) ; "duplicate")]
#[test_case(json!({}) ; "missing")]
#[tokio::test]
async fn create_rejects_invalid_name(payload: Value) {
    let app = TestApp::spawn().await;

    let response = app.post("/api/labels").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "name");
}

#[tokio::test]
async fn update_renames_label() {
    let app = TestApp::spawn().await;
    let id = app.db.label_id("feature");

    let response = app
        .put(&format!("/api/labels/{id}"))
        .json(&json!({ "name": "enhancement" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "enhancement");
}

#[tokio::test]
async fn update_with_empty_body_changes_nothing() {
    let app = TestApp::spawn().await;
    let id = app.db.label_id("bug");

    let response = app.put(&format!("/api/labels/{id}")).json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "bug");
}

#[tokio::test]
async fn update_missing_label_is_not_found() {
    let app = TestApp::spawn().await;

    app.put("/api/labels/4242")
        .json(&json!({ "name": "whatever" }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn delete_unused_label() {
    let app = TestApp::spawn().await;
    let id = app.db.label_id("bug");

    app.delete(&format!("/api/labels/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.get(&format!("/api/labels/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn delete_label_attached_to_task_conflicts() {
    let app = TestApp::spawn().await;
    let id = app.db.label_id("bug");
    app.post("/api/tasks")
        .json(&json!({ "title": "Crash on start", "status": "draft", "taskLabelIds": [id] }))
        .await
        .assert_status(StatusCode::CREATED);

    app.delete(&format!("/api/labels/{id}"))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::spawn().await;

    app.get("/api/labels/abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
