//! Geotagged photo aggregate

pub mod model;
pub mod repository;

pub use model::{CreatePhotoDto, Photo};
pub use repository::PhotoRepositoryInterface;
