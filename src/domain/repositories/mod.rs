//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to all per-aggregate
//! repositories; consumers request only the one they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let photos = repos.photos().list_photos().await?;
//! }
//! ```

use super::gps::GpsPingRepositoryInterface;
use super::lead::LeadRepositoryInterface;
use super::photo::PhotoRepositoryInterface;
use super::user::UserRepositoryInterface;

pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepositoryInterface;
    fn photos(&self) -> &dyn PhotoRepositoryInterface;
    fn leads(&self) -> &dyn LeadRepositoryInterface;
    fn gps_pings(&self) -> &dyn GpsPingRepositoryInterface;
}
