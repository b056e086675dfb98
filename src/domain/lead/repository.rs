use async_trait::async_trait;

use super::{CreateLeadDto, Lead};
use crate::domain::DomainResult;

#[async_trait]
pub trait LeadRepositoryInterface: Send + Sync {
    async fn create_lead(&self, dto: CreateLeadDto) -> DomainResult<Lead>;
    async fn list_leads(&self) -> DomainResult<Vec<Lead>>;
}
