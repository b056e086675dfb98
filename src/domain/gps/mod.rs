//! GPS ping aggregate

pub mod model;
pub mod repository;

pub use model::{CreateGpsPingDto, GpsPing, DEFAULT_ACTIVITY_TYPE, LATEST_PINGS_LIMIT};
pub use repository::GpsPingRepositoryInterface;
