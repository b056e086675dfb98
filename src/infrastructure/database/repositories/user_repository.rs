use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::convert::{domain_role_to_entity, user_model_to_domain};
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            id: Set(dto.id),
            email: Set(dto.email),
            full_name: Set(dto.full_name),
            role: Set(domain_role_to_entity(dto.role)),
            created_at: Set(Utc::now()),
        };

        let model = new_user.insert(&self.db).await?;
        Ok(user_model_to_domain(model))
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn find_admin(&self) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Role.eq(user::UserRole::Admin))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn update_role(&self, id: &str, role: UserRole) -> DomainResult<User> {
        let Some(existing) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Err(DomainError::Storage(format!(
                "No user row matched id '{}'",
                id
            )));
        };

        let mut active: user::ActiveModel = existing.into();
        active.role = Set(domain_role_to_entity(role));
        let model = active.update(&self.db).await?;

        Ok(user_model_to_domain(model))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, UserRole};
    use crate::test_support::TestContext;

    #[tokio::test]
    async fn list_users_is_newest_first() {
        let ctx = TestContext::new().await;
        ctx.seed_profile("first@example.com", "First", UserRole::Agent).await;
        ctx.seed_profile("second@example.com", "Second", UserRole::Admin).await;

        let users = ctx.repos.users().list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].created_at >= users[1].created_at);
    }

    #[tokio::test]
    async fn find_admin_ignores_agents() {
        let ctx = TestContext::new().await;
        ctx.seed_profile("agent@example.com", "Agent", UserRole::Agent).await;
        assert!(ctx.repos.users().find_admin().await.unwrap().is_none());

        let admin = ctx.seed_profile("admin@example.com", "Admin", UserRole::Admin).await;
        let found = ctx.repos.users().find_admin().await.unwrap().unwrap();
        assert_eq!(found.id, admin.id);
    }

    #[tokio::test]
    async fn update_role_of_missing_user_is_a_storage_error() {
        let ctx = TestContext::new().await;
        let err = ctx
            .repos
            .users()
            .update_role("missing", UserRole::Admin)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_storage_error() {
        let ctx = TestContext::new().await;
        ctx.seed_profile("dup@example.com", "One", UserRole::Agent).await;

        let err = ctx
            .repos
            .users()
            .create_user(crate::domain::CreateUserDto {
                id: "other-id".to_string(),
                email: "dup@example.com".to_string(),
                full_name: "Two".to_string(),
                role: UserRole::Agent,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
