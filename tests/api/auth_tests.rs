//! Authentication API Tests

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{TestApp, ADMIN_EMAIL, ADMIN_PASSWORD};

#[tokio::test]
async fn login_with_seeded_credentials_returns_token() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "username": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .await;

    response.assert_status_ok();
    let token = response.text();
    assert_eq!(token.split('.').count(), 3, "expected a JWT, got {token}");

    app.authed(app.server.get("/api/users"), &token)
        .await
        .assert_status_ok();
}

#[test_case(ADMIN_EMAIL, "wrong-password" ; "wrong password")]
#[test_case("nobody@example.com", ADMIN_PASSWORD ; "unknown user")]
#[tokio::test]
async fn login_with_bad_credentials_is_unauthorized(username: &str, password: &str) {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 401);
}

#[tokio::test]
async fn login_with_blank_fields_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "username": " ", "password": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["password", "username"]);
}

#[tokio::test]
async fn login_without_password_names_the_field() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "username": ADMIN_EMAIL }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "password");
}

#[tokio::test]
async fn login_with_unparseable_body_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.server.post("/api/login").text("{username:").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>().get("errors").is_none());
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/api/tasks").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["message"],
        "Missing authorization header"
    );
}

#[test_case("Bearer not-a-jwt" ; "garbage token")]
#[test_case("Basic dXNlcjpwYXNz" ; "wrong scheme")]
#[tokio::test]
async fn protected_route_with_bad_token_is_unauthorized(header: &str) {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .get("/api/labels")
        .add_header(AUTHORIZATION, HeaderValue::from_str(header).unwrap())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = TestApp::spawn().await;
    let mut jwt_settings = crate::common::test_settings().jwt;
    jwt_settings.secret = "a-completely-different-secret-value-123".into();
    let foreign = task_manager::application::services::JwtService::new(jwt_settings)
        .issue(ADMIN_EMAIL)
        .unwrap();

    app.authed(app.server.get("/api/labels"), &foreign)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
