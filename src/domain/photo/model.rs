//! Photo domain entity

use chrono::{DateTime, Utc};

use crate::domain::Creator;

/// A photo uploaded from the field. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: String,
    pub user_id: String,
    /// Opaque encoded payload or URL
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub creator: Option<Creator>,
}

#[derive(Debug, Clone)]
pub struct CreatePhotoDto {
    pub user_id: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}
