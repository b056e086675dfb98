use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};

use super::convert::ping_to_domain;
use crate::domain::gps::DEFAULT_ACTIVITY_TYPE;
use crate::domain::{
    CreateGpsPingDto, DomainError, DomainResult, GpsPing, GpsPingRepositoryInterface,
};
use crate::infrastructure::database::entities::{gps_ping, user};

pub struct GpsPingRepository {
    db: DatabaseConnection,
}

impl GpsPingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GpsPingRepositoryInterface for GpsPingRepository {
    async fn record_ping(&self, dto: CreateGpsPingDto) -> DomainResult<GpsPing> {
        let id = uuid::Uuid::new_v4().to_string();

        gps_ping::ActiveModel {
            id: Set(id.clone()),
            user_id: Set(dto.user_id),
            latitude: Set(dto.latitude),
            longitude: Set(dto.longitude),
            activity_type: Set(dto
                .activity_type
                .unwrap_or_else(|| DEFAULT_ACTIVITY_TYPE.to_string())),
            timestamp: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;

        let row = gps_ping::Entity::find_by_id(id.as_str())
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::Storage(format!("Inserted GPS ping '{}' not found", id)))?;

        Ok(ping_to_domain(row))
    }

    async fn list_latest(&self, limit: u64) -> DomainResult<Vec<GpsPing>> {
        let rows = gps_ping::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(gps_ping::Column::Timestamp)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(ping_to_domain).collect())
    }
}
