//! Task Handlers

use axum::{extract::State, http::StatusCode, response::Response, Json};

use super::listing;
use crate::application::dto::{CreateTaskRequest, TaskFilterParams, TaskResponse, UpdateTaskRequest};
use crate::presentation::http::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::shared::error::{AppError, ErrorResponse};
use crate::startup::AppState;

/// List tasks, optionally filtered
///
/// All given filters must match.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(TaskFilterParams),
    responses(
        (status = 200, body = Vec<TaskResponse>,
            headers(("X-Total-Count" = usize, description = "Number of matching tasks"))),
        (status = 400, description = "Malformed filter", body = ErrorResponse)
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TaskFilterParams>,
) -> Result<Response, AppError> {
    Ok(listing(state.tasks.list(params.into()).await?))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, body = TaskResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TaskResponse>, AppError> {
    Ok(Json(state.tasks.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    request_body = CreateTaskRequest,
    responses(
        (status = 201, body = TaskResponse),
        (status = 400, description = "Invalid payload or unknown reference", body = ErrorResponse)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let task = state.tasks.create(body).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, body = TaskResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    Ok(Json(state.tasks.update(id, body).await?))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.tasks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
