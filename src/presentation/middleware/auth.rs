//! Authentication Middleware
//!
//! Bearer JWT validation for protected routes. Stateless: only the token's
//! signature, expiry and issuer are checked.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    RequestExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejectionReason,
    TypedHeader,
};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated principal, inserted into request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Token subject (the account email)
    pub email: String,
}

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = request
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|rejection| match rejection.reason() {
            TypedHeaderRejectionReason::Missing => {
                AppError::Unauthorized("Missing authorization header".into())
            }
            _ => AppError::Unauthorized("Invalid authorization header format".into()),
        })?;

    let claims = state.jwt.verify(bearer.token())?;

    request
        .extensions_mut()
        .insert(AuthUser { email: claims.sub });

    Ok(next.run(request).await)
}
