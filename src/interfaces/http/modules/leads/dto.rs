//! Lead DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateLeadDto, Lead};
use crate::interfaces::http::modules::users::CreatorDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeadDto {
    pub id: String,
    pub user_id: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub business_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub users: Option<CreatorDto>,
}

impl From<Lead> for LeadDto {
    fn from(l: Lead) -> Self {
        Self {
            id: l.id,
            user_id: l.user_id,
            contact_name: l.contact_name,
            contact_phone: l.contact_phone,
            contact_email: l.contact_email,
            business_name: l.business_name,
            latitude: l.latitude,
            longitude: l.longitude,
            notes: l.notes,
            created_at: l.created_at,
            users: l.creator.map(CreatorDto::from),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub business_name: String,
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateLeadRequest> for CreateLeadDto {
    fn from(r: CreateLeadRequest) -> Self {
        Self {
            user_id: r.user_id,
            contact_name: r.contact_name,
            contact_phone: r.contact_phone,
            contact_email: r.contact_email,
            business_name: r.business_name,
            latitude: r.latitude,
            longitude: r.longitude,
            notes: r.notes,
        }
    }
}
