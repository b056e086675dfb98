//! Domain layer: entities, repository interfaces and the identity port.

pub mod error;
pub mod gps;
pub mod identity;
pub mod lead;
pub mod photo;
pub mod repositories;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use gps::{
    CreateGpsPingDto, GpsPing, GpsPingRepositoryInterface, DEFAULT_ACTIVITY_TYPE, LATEST_PINGS_LIMIT,
};
pub use identity::{AuthSession, AuthUser, IdentityProvider};
pub use lead::{CreateLeadDto, Lead, LeadRepositoryInterface};
pub use photo::{CreatePhotoDto, Photo, PhotoRepositoryInterface};
pub use repositories::RepositoryProvider;
pub use user::{CreateUserDto, Creator, User, UserRepositoryInterface, UserRole};
