//! Lead domain entity

use chrono::{DateTime, Utc};

use crate::domain::Creator;

/// Prospective-customer contact captured in the field
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
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
    pub creator: Option<Creator>,
}

#[derive(Debug, Clone)]
pub struct CreateLeadDto {
    pub user_id: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub business_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub notes: Option<String>,
}
