//! Authentication Handlers

use axum::extract::State;

use crate::application::dto::LoginRequest;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::{AppError, ErrorResponse};
use crate::startup::AppState;

/// Exchange credentials for an access token
///
/// The token is returned as plain text.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "JWT access token", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Bad credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<String, AppError> {
    let token = state.auth.authenticate(&body.username, &body.password).await?;
    Ok(token)
}
