//! Per-request session resolution
//!
//! Every `/api` request passes through [`session_middleware`], which turns
//! the `Authorization: Bearer <token>` header (if any) into a
//! [`RequestSession`] stored in the request extensions. Handlers that care
//! about the caller read it from there; nothing is kept between requests.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::application::AuthService;
use crate::domain::{AuthUser, DomainError};

/// Who is calling, as far as this request is concerned.
#[derive(Clone, Debug)]
pub enum RequestSession {
    /// No bearer token was presented
    Anonymous,
    /// A token was presented but could not be resolved
    Rejected(DomainError),
    Authenticated(AuthUser),
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_token)
        .map(String::from)
}

pub async fn session_middleware(
    State(auth): State<Arc<AuthService>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let session = match bearer_token(request.headers()) {
        None => RequestSession::Anonymous,
        Some(token) => match auth.current_user(&token).await {
            Ok(user) => RequestSession::Authenticated(user),
            Err(e) => {
                debug!(error = %e, "Bearer token rejected");
                RequestSession::Rejected(e)
            }
        },
    };

    request.extensions_mut().insert(session);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_prefix_is_required() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert_eq!(bearer_token(&headers), None);
    }
}
