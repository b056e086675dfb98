//! User API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{UpdateRoleRequest, UserDto};
use crate::application::UserService;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiError, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All profiles, newest first", body = Vec<UserDto>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_users(
    State(users): State<Arc<UserService>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = users.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    tag = "Users",
    params(("id" = String, Path, description = "Profile id")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Role is not one of agent, admin", body = ErrorBody),
        (status = 500, description = "Store failure or unknown id", body = ErrorBody)
    )
)]
pub async fn update_role(
    State(users): State<Arc<UserService>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateRoleRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = users.update_role(&id, &request.role).await?;
    Ok(Json(user.into()))
}
