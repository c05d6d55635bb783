//! Label Handlers

use axum::{extract::State, http::StatusCode, response::Response, Json};

use super::listing;
use crate::application::dto::{CreateLabelRequest, LabelResponse, UpdateLabelRequest};
use crate::presentation::http::extractors::{ApiPath, ValidatedJson};
use crate::shared::error::{AppError, ErrorResponse};
use crate::startup::AppState;

#[utoipa::path(
    get,
    path = "/api/labels",
    tag = "labels",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = Vec<LabelResponse>,
            headers(("X-Total-Count" = usize, description = "Number of labels")))
    )
)]
pub async fn list_labels(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(listing(state.labels.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/labels/{id}",
    tag = "labels",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Label id")),
    responses(
        (status = 200, body = LabelResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn get_label(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<LabelResponse>, AppError> {
    Ok(Json(state.labels.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/labels",
    tag = "labels",
    security(("bearer_auth" = [])),
    request_body = CreateLabelRequest,
    responses(
        (status = 201, body = LabelResponse),
        (status = 400, body = ErrorResponse)
    )
)]
pub async fn create_label(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateLabelRequest>,
) -> Result<(StatusCode, Json<LabelResponse>), AppError> {
    let label = state.labels.create(body).await?;
    Ok((StatusCode::CREATED, Json(label)))
}

#[utoipa::path(
    put,
    path = "/api/labels/{id}",
    tag = "labels",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Label id")),
    request_body = UpdateLabelRequest,
    responses(
        (status = 200, body = LabelResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_label(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<UpdateLabelRequest>,
) -> Result<Json<LabelResponse>, AppError> {
    Ok(Json(state.labels.update(id, body).await?))
}

#[utoipa::path(
    delete,
    path = "/api/labels/{id}",
    tag = "labels",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Label id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, body = ErrorResponse),
        (status = 409, description = "Label is attached to tasks", body = ErrorResponse)
    )
)]
pub async fn delete_label(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.labels.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
