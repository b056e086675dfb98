//! Authentication DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{LoginOutcome, RegistrationOutcome};
use crate::domain::{AuthSession, AuthUser};
use crate::interfaces::http::modules::users::UserDto;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "agent@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "must be 6 to 128 characters"))]
    pub password: String,
    #[serde(rename = "fullName")]
    #[validate(length(min = 1, message = "is required"))]
    pub full_name: String,
    /// `agent` (default) or `admin`
    #[serde(default)]
    pub role: Option<String>,
}

/// Identity record as returned to the client
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl From<AuthUser> for AuthUserDto {
    fn from(u: AuthUser) -> Self {
        Self {
            id: u.id,
            email: u.email,
            created_at: u.created_at,
            last_sign_in_at: u.last_sign_in_at,
        }
    }
}

/// Session handed back on login. Clients treat it as opaque and send
/// `access_token` as a bearer token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: i64,
    pub user: AuthUserDto,
}

impl From<AuthSession> for SessionDto {
    fn from(s: AuthSession) -> Self {
        Self {
            access_token: s.access_token,
            token_type: s.token_type,
            expires_in: s.expires_in,
            expires_at: s.expires_at,
            user: s.user.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: AuthUserDto,
    pub profile: UserDto,
    pub session: SessionDto,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(o: LoginOutcome) -> Self {
        Self {
            user: o.user.into(),
            profile: o.profile.into(),
            session: o.session.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user: AuthUserDto,
    pub profile: UserDto,
}

impl From<RegistrationOutcome> for RegisterResponse {
    fn from(o: RegistrationOutcome) -> Self {
        Self {
            user: o.user.into(),
            profile: o.profile.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    pub user: AuthUserDto,
}
