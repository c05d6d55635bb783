//! User API Tests

use axum::http::StatusCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{TestApp, ADMIN_EMAIL};

#[tokio::test]
async fn list_users_hides_password() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/users").await;

    response.assert_status_ok();
    assert_eq!(response.header("x-total-count"), "1");
    let users = response.json::<Vec<Value>>();
    assert_eq!(users[0]["email"], ADMIN_EMAIL);
    assert!(users[0].get("password").is_none());
    assert!(users[0].get("passwordDigest").is_none());
}

#[tokio::test]
async fn created_user_can_log_in() {
    let app = TestApp::spawn().await;
    let email: String = SafeEmail().fake();
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let response = app
        .post("/api/users")
        .json(&json!({
            "email": email,
            "firstName": first_name,
            "lastName": last_name,
            "password": "s3cret"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["email"], email);
    assert_eq!(body["firstName"], first_name);
    assert_eq!(body["lastName"], last_name);

    app.server
        .post("/api/login")
        .json(&json!({ "username": email, "password": "s3cret" }))
        .await
        .assert_status_ok();
}

#[test_case(json!({ "email": "not-an-email", "password": "secret" }), "email" ; "bad email")]
#[test_case(json!({ "email": "short@example.com", "password": "ab" }), "password" ; "short password")]
#[test_case(json!({ "email": ADMIN_EMAIL, "password": "secret" }), "email" ; "taken email")]
#[tokio::test]
async fn create_user_rejects_invalid_payload(payload: Value, field: &str) {
    let app = TestApp::spawn().await;

    let response = app.post("/api/users").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], field);
    assert_eq!(app.db.user_count(), 1);
}

#[tokio::test]
async fn owner_can_update_own_profile() {
    let app = TestApp::spawn().await;
    let id = app.db.user_id(ADMIN_EMAIL);

    let response = app
        .put(&format!("/api/users/{id}"))
        .json(&json!({ "firstName": "Ada", "lastName": null }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], Value::Null);
    assert_eq!(body["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn updating_someone_else_is_forbidden() {
    let app = TestApp::spawn().await;
    let id = app.db.user_id(ADMIN_EMAIL);
    let stranger = app.token_for("stranger@example.com");

    let response = app
        .authed(app.server.put(&format!("/api/users/{id}")), &stranger)
        .json(&json!({ "firstName": "Mallory" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn deleting_someone_else_is_forbidden() {
    let app = TestApp::spawn().await;
    let id = app.db.user_id(ADMIN_EMAIL);
    let stranger = app.token_for("stranger@example.com");

    app.authed(app.server.delete(&format!("/api/users/{id}")), &stranger)
        .await
        .assert_status(StatusCode::FORBIDDEN);
    assert_eq!(app.db.user_count(), 1);
}

#[tokio::test]
async fn missing_user_is_not_found_before_ownership() {
    let app = TestApp::spawn().await;

    app.delete("/api/users/777").await.assert_status_not_found();
    app.get("/api/users/777").await.assert_status_not_found();
}

#[tokio::test]
async fn owner_can_delete_account() {
    let app = TestApp::spawn().await;
    let id = app.db.user_id(ADMIN_EMAIL);

    app.delete(&format!("/api/users/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert_eq!(app.db.user_count(), 0);
}

#[tokio::test]
async fn deleting_assigned_user_conflicts() {
    let app = TestApp::spawn().await;
    let id = app.db.user_id(ADMIN_EMAIL);
    app.post("/api/tasks")
        .json(&json!({ "title": "Owned", "status": "draft", "assignee_id": id }))
        .await
        .assert_status(StatusCode::CREATED);

    app.delete(&format!("/api/users/{id}"))
        .await
        .assert_status(StatusCode::CONFLICT);
}
