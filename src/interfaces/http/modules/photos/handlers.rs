//! Photo API handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use super::dto::{CreatePhotoRequest, PhotoDto};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiError, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/photos",
    tag = "Photos",
    responses(
        (status = 200, description = "All photos with creator, newest first", body = Vec<PhotoDto>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_photos(
    State(repos): State<Arc<dyn RepositoryProvider>>,
) -> Result<Json<Vec<PhotoDto>>, ApiError> {
    let photos = repos.photos().list_photos().await?;
    Ok(Json(photos.into_iter().map(PhotoDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/photos",
    tag = "Photos",
    request_body = CreatePhotoRequest,
    responses(
        (status = 200, description = "Stored photo with creator", body = PhotoDto),
        (status = 400, description = "Invalid coordinates or missing fields", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_photo(
    State(repos): State<Arc<dyn RepositoryProvider>>,
    ValidatedJson(request): ValidatedJson<CreatePhotoRequest>,
) -> Result<Json<PhotoDto>, ApiError> {
    let photo = repos.photos().create_photo(request.into()).await?;

    metrics::counter!("photos_uploaded_total").increment(1);
    info!(photo_id = %photo.id, user_id = %photo.user_id, "Photo uploaded");

    Ok(Json(photo.into()))
}
