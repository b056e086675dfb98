use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::convert::lead_to_domain;
use crate::domain::{CreateLeadDto, DomainError, DomainResult, Lead, LeadRepositoryInterface};
use crate::infrastructure::database::entities::{lead, user};

pub struct LeadRepository {
    db: DatabaseConnection,
}

impl LeadRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeadRepositoryInterface for LeadRepository {
    async fn create_lead(&self, dto: CreateLeadDto) -> DomainResult<Lead> {
        let id = uuid::Uuid::new_v4().to_string();

        lead::ActiveModel {
            id: Set(id.clone()),
            user_id: Set(dto.user_id),
            contact_name: Set(dto.contact_name),
            contact_phone: Set(dto.contact_phone),
            contact_email: Set(dto.contact_email),
            business_name: Set(dto.business_name),
            latitude: Set(dto.latitude),
            longitude: Set(dto.longitude),
            notes: Set(dto.notes.unwrap_or_default()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;

        let row = lead::Entity::find_by_id(id.as_str())
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::Storage(format!("Inserted lead '{}' not found", id)))?;

        Ok(lead_to_domain(row))
    }

    async fn list_leads(&self) -> DomainResult<Vec<Lead>> {
        let rows = lead::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(lead::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(lead_to_domain).collect())
    }
}
