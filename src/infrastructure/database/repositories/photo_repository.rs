use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::convert::photo_to_domain;
use crate::domain::{CreatePhotoDto, DomainError, DomainResult, Photo, PhotoRepositoryInterface};
use crate::infrastructure::database::entities::{photo, user};

pub struct PhotoRepository {
    db: DatabaseConnection,
}

impl PhotoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PhotoRepositoryInterface for PhotoRepository {
    async fn create_photo(&self, dto: CreatePhotoDto) -> DomainResult<Photo> {
        let id = uuid::Uuid::new_v4().to_string();

        photo::ActiveModel {
            id: Set(id.clone()),
            user_id: Set(dto.user_id),
            image_url: Set(dto.image_url),
            latitude: Set(dto.latitude),
            longitude: Set(dto.longitude),
            description: Set(dto.description.unwrap_or_default()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;

        let row = photo::Entity::find_by_id(id.as_str())
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::Storage(format!("Inserted photo '{}' not found", id)))?;

        Ok(photo_to_domain(row))
    }

    async fn list_photos(&self) -> DomainResult<Vec<Photo>> {
        let rows = photo::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(photo::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(photo_to_domain).collect())
    }
}
