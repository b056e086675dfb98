use async_trait::async_trait;

use super::{CreateGpsPingDto, GpsPing};
use crate::domain::DomainResult;

#[async_trait]
pub trait GpsPingRepositoryInterface: Send + Sync {
    async fn record_ping(&self, dto: CreateGpsPingDto) -> DomainResult<GpsPing>;

    /// Most recent pings first, at most `limit` rows.
    async fn list_latest(&self, limit: u64) -> DomainResult<Vec<GpsPing>>;
}
