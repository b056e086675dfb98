//! GPS ping DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateGpsPingDto, GpsPing};
use crate::interfaces::http::modules::users::CreatorDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GpsPingDto {
    pub id: String,
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[schema(example = "active")]
    pub activity_type: String,
    pub timestamp: DateTime<Utc>,
    pub users: Option<CreatorDto>,
}

impl From<GpsPing> for GpsPingDto {
    fn from(p: GpsPing) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            latitude: p.latitude,
            longitude: p.longitude,
            activity_type: p.activity_type,
            timestamp: p.timestamp,
            users: p.creator.map(CreatorDto::from),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGpsPingRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub user_id: String,
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
    /// Defaults to `active`
    #[serde(default)]
    pub activity_type: Option<String>,
}

impl From<CreateGpsPingRequest> for CreateGpsPingDto {
    fn from(r: CreateGpsPingRequest) -> Self {
        Self {
            user_id: r.user_id,
            latitude: r.latitude,
            longitude: r.longitude,
            activity_type: r.activity_type,
        }
    }
}
