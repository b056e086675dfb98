use async_trait::async_trait;

use super::{CreateUserDto, User, UserRole};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    /// All profiles, newest first.
    async fn list_users(&self) -> DomainResult<Vec<User>>;
    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    async fn find_admin(&self) -> DomainResult<Option<User>>;

    /// Fails with a storage error when no row matches `id`.
    async fn update_role(&self, id: &str, role: UserRole) -> DomainResult<User>;
}
