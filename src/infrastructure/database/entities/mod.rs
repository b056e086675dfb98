//! Database entities module

pub mod gps_ping;
pub mod identity;
pub mod lead;
pub mod photo;
pub mod user;

