//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

use axum::{
    http::HeaderName,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub mod auth;
pub mod health;
pub mod label;
pub mod openapi;
pub mod task;
pub mod task_status;
pub mod user;

/// Number of items in a list response.
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// JSON array response carrying its length in `X-Total-Count`.
pub(crate) fn listing<T: Serialize>(items: Vec<T>) -> Response {
    let count = items.len().to_string();
    ([(X_TOTAL_COUNT, count)], Json(items)).into_response()
}
