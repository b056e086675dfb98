pub mod auth;
pub mod gps_tracking;
pub mod health;
pub mod leads;
pub mod metrics;
pub mod photos;
pub mod request_id;
pub mod users;
