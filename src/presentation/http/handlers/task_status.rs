//! Task Status Handlers

use axum::{extract::State, http::StatusCode, response::Response, Json};

use super::listing;
use crate::application::dto::{CreateTaskStatusRequest, TaskStatusResponse, UpdateTaskStatusRequest};
use crate::presentation::http::extractors::{ApiPath, ValidatedJson};
use crate::shared::error::{AppError, ErrorResponse};
use crate::startup::AppState;

#[utoipa::path(
    get,
    path = "/api/task_statuses",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = Vec<TaskStatusResponse>,
            headers(("X-Total-Count" = usize, description = "Number of statuses")))
    )
)]
pub async fn list_task_statuses(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(listing(state.task_statuses.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/task_statuses/{id}",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Task status id")),
    responses(
        (status = 200, body = TaskStatusResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn get_task_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TaskStatusResponse>, AppError> {
    Ok(Json(state.task_statuses.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/task_statuses",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    request_body = CreateTaskStatusRequest,
    responses(
        (status = 201, body = TaskStatusResponse),
        (status = 400, body = ErrorResponse)
    )
)]
pub async fn create_task_status(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateTaskStatusRequest>,
) -> Result<(StatusCode, Json<TaskStatusResponse>), AppError> {
    let status = state.task_statuses.create(body).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

#[utoipa::path(
    put,
    path = "/api/task_statuses/{id}",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Task status id")),
    request_body = UpdateTaskStatusRequest,
    responses(
        (status = 200, body = TaskStatusResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_task_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<UpdateTaskStatusRequest>,
) -> Result<Json<TaskStatusResponse>, AppError> {
    Ok(Json(state.task_statuses.update(id, body).await?))
}

#[utoipa::path(
    delete,
    path = "/api/task_statuses/{id}",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Task status id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, body = ErrorResponse),
        (status = 409, description = "Status is used by tasks", body = ErrorResponse)
    )
)]
pub async fn delete_task_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.task_statuses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
