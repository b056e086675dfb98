use async_trait::async_trait;

use super::{CreatePhotoDto, Photo};
use crate::domain::DomainResult;

#[async_trait]
pub trait PhotoRepositoryInterface: Send + Sync {
    /// Insert and read back the row joined with its creator.
    async fn create_photo(&self, dto: CreatePhotoDto) -> DomainResult<Photo>;

    /// All photos, newest first.
    async fn list_photos(&self) -> DomainResult<Vec<Photo>>;
}
