//! Photo DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreatePhotoDto, Photo};
use crate::interfaces::http::modules::users::CreatorDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Creator summary
    pub users: Option<CreatorDto>,
}

impl From<Photo> for PhotoDto {
    fn from(p: Photo) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            image_url: p.image_url,
            latitude: p.latitude,
            longitude: p.longitude,
            description: p.description,
            created_at: p.created_at,
            users: p.creator.map(CreatorDto::from),
        }
    }
}

/// Photo upload request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePhotoRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "https://cdn.example.com/p/1.jpg")]
    pub image_url: String,
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreatePhotoRequest> for CreatePhotoDto {
    fn from(r: CreatePhotoRequest) -> Self {
        Self {
            user_id: r.user_id,
            image_url: r.image_url,
            latitude: r.latitude,
            longitude: r.longitude,
            description: r.description,
        }
    }
}
