use async_trait::async_trait;

use super::{AuthSession, AuthUser};
use crate::domain::DomainResult;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Wrong password and unknown email both yield `Unauthorized`.
    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> DomainResult<AuthSession>;

    /// Duplicate email yields `Conflict`.
    async fn sign_up(&self, email: &str, password: &str) -> DomainResult<AuthUser>;

    /// Resolve an access token to its account.
    async fn get_user(&self, access_token: &str) -> DomainResult<AuthUser>;

    async fn delete_user(&self, id: &str) -> DomainResult<()>;
}
