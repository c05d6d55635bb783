//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{auth_middleware, report_errors, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route("/api-docs/openapi.json", get(handlers::openapi::openapi_json))
        .layer(middleware::from_fn_with_state(state.clone(), report_errors))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(stats) = state.probe.pool_stats() {
        metrics::update_db_pool_stats(stats.idle, stats.active, stats.max);
    }

    match metrics::gather_metrics() {
        Ok(body) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            body,
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, "text/plain; charset=utf-8")],
                String::new(),
            )
        }
    }
}

/// `/api` routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public
        .route("/login", post(handlers::auth::login))
        // Protected routes (require authentication)
        .merge(user_routes(state.clone()))
        .merge(task_status_routes(state.clone()))
        .merge(label_routes(state.clone()))
        .merge(task_routes(state))
}

/// User routes (protected)
fn user_routes(state: AppState) -> Router<AppState> {
    use handlers::user::*;

    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Task status routes (protected)
fn task_status_routes(state: AppState) -> Router<AppState> {
    use handlers::task_status::*;

    Router::new()
        .route(
            "/task_statuses",
            get(list_task_statuses).post(create_task_status),
        )
        .route(
            "/task_statuses/{id}",
            get(get_task_status)
                .put(update_task_status)
                .delete(delete_task_status),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Label routes (protected)
fn label_routes(state: AppState) -> Router<AppState> {
    use handlers::label::*;

    Router::new()
        .route("/labels", get(list_labels).post(create_label))
        .route(
            "/labels/{id}",
            get(get_label).put(update_label).delete(delete_label),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Task routes (protected)
fn task_routes(state: AppState) -> Router<AppState> {
    use handlers::task::*;

    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
