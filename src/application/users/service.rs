//! User management service

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainResult, RepositoryProvider, User, UserRole};

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// All profiles, newest first.
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repos.users().list_users().await
    }

    /// Change a user's role. `raw_role` must be on the allow-list; anything
    /// else is a validation error and nothing is written.
    pub async fn update_role(&self, user_id: &str, raw_role: &str) -> DomainResult<User> {
        let role: UserRole = raw_role.parse()?;
        let user = self.repos.users().update_role(user_id, role).await?;
        info!(%user_id, role = %user.role, "User role updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::test_support::TestContext;

    #[tokio::test]
    async fn update_role_accepts_allowed_values() {
        let ctx = TestContext::new().await;
        let user = ctx.seed_profile("a@example.com", "Agent A", UserRole::Agent).await;

        let updated = ctx.users.update_role(&user.id, "admin").await.unwrap();
        assert_eq!(updated.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn update_role_rejects_unknown_values_without_writing() {
        let ctx = TestContext::new().await;
        let user = ctx.seed_profile("b@example.com", "Agent B", UserRole::Agent).await;

        let err = ctx.users.update_role(&user.id, "owner").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let stored = ctx.repos.users().get_user_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.role, UserRole::Agent);
    }

    #[tokio::test]
    async fn update_role_for_unknown_user_is_a_storage_error() {
        let ctx = TestContext::new().await;
        let err = ctx.users.update_role("missing", "agent").await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
