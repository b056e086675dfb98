//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Creator, User};

/// User profile API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[schema(example = "agent")]
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            role: u.role.as_str().to_string(),
            created_at: u.created_at,
        }
    }
}

/// Creator summary embedded in photos, leads and pings under `users`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatorDto {
    pub id: String,
    pub full_name: String,
    pub role: String,
}

impl From<Creator> for CreatorDto {
    fn from(c: Creator) -> Self {
        Self {
            id: c.id,
            full_name: c.full_name,
            role: c.role.as_str().to_string(),
        }
    }
}

/// Role change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "admin")]
    pub role: String,
}
