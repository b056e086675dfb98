//! HTTP error mapping
//!
//! Every failure leaves the service as `{"error": "<message>"}`. The only
//! other error shape is the `{"message": ...}` body of the unmatched-route
//! fallback.

use std::any::Any;

use axum::{
    body::Body,
    http::{Response as HttpResponse, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const ENDPOINT_NOT_FOUND: &str = "API endpoint not found";

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Body returned for unknown routes
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundBody {
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 with the given message
    BadRequest(String),
    /// 401 with the given message
    Unauthorized(String),
    /// 500 carrying the store's own message
    Store(String),
    /// 500 with a generic message; the cause is only logged
    Internal(String),
}

impl ApiError {
    /// Mapping for the credential flows (login, register): every refusal is
    /// the caller's problem and surfaces as 400.
    pub fn from_auth(err: DomainError) -> Self {
        match err {
            DomainError::Internal(cause) => ApiError::Internal(cause),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Conflict(msg) => ApiError::BadRequest(msg),
            e @ DomainError::NotFound { .. } => ApiError::BadRequest(e.to_string()),
            DomainError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            DomainError::Storage(msg) => ApiError::Store(msg),
            DomainError::Internal(cause) => ApiError::Internal(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Store(msg) => {
                error!(error = %msg, "Store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(cause) => {
                error!(error = %cause, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn endpoint_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            message: ENDPOINT_NOT_FOUND.to_string(),
        }),
    )
        .into_response()
}

/// Response for a handler that panicked. Used with `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> HttpResponse<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
