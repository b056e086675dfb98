//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use super::dto::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::application::{AuthService, RegistrationError};
use crate::domain::DomainError;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiError, ErrorBody};
use crate::interfaces::http::middleware::RequestSession;

const PROFILE_NOT_FOUND: &str = "User profile not found";
const SESSION_MISSING: &str = "Auth session missing!";

#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "Authentication",
    responses(
        (status = 200, description = "Identity behind the bearer token", body = CurrentUserResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_current_user(
    Extension(session): Extension<RequestSession>,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    match session {
        RequestSession::Authenticated(user) => Ok(Json(CurrentUserResponse { user: user.into() })),
        RequestSession::Anonymous => Err(ApiError::Unauthorized(SESSION_MISSING.to_string())),
        RequestSession::Rejected(DomainError::Internal(cause)) => Err(ApiError::Internal(cause)),
        RequestSession::Rejected(e) => Err(ApiError::Unauthorized(e.to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Bad credentials or no profile", body = ErrorBody)
    )
)]
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = auth
        .login(&request.email, &request.password)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => ApiError::BadRequest(PROFILE_NOT_FOUND.to_string()),
            other => ApiError::from_auth(other),
        })?;

    Ok(Json(outcome.into()))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Identity and profile created", body = RegisterResponse),
        (status = 400, description = "Rejected by validation or the identity store", body = ErrorBody),
        (status = 500, description = "Profile could not be written", body = ErrorBody)
    )
)]
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let outcome = auth
        .register(
            &request.email,
            &request.password,
            &request.full_name,
            request.role.as_deref(),
        )
        .await
        .map_err(|e| match e {
            RegistrationError::Rejected(e) => ApiError::from_auth(e),
            RegistrationError::ProfileFailed {
                source: DomainError::Internal(cause),
                ..
            } => ApiError::Internal(cause),
            RegistrationError::ProfileFailed { source, .. } => ApiError::Store(source.to_string()),
        })?;

    Ok(Json(outcome.into()))
}
