//! GPS ping domain entity

use chrono::{DateTime, Utc};

use crate::domain::Creator;

/// Activity tag applied when the client sends none
pub const DEFAULT_ACTIVITY_TYPE: &str = "active";

/// Upper bound on pings returned by a single listing
pub const LATEST_PINGS_LIMIT: u64 = 100;

/// One timestamped location report
#[derive(Debug, Clone, PartialEq)]
pub struct GpsPing {
    pub id: String,
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub activity_type: String,
    pub timestamp: DateTime<Utc>,
    pub creator: Option<Creator>,
}

#[derive(Debug, Clone)]
pub struct CreateGpsPingDto {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub activity_type: Option<String>,
}
