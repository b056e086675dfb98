//! Authentication service: application-layer orchestration
//!
//! Combines the identity collaborator (credentials, sessions) with the
//! profile rows in `users`. HTTP handlers are thin wrappers around it.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    AuthSession, AuthUser, CreateUserDto, DomainError, DomainResult, IdentityProvider,
    RepositoryProvider, User, UserRole,
};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: AuthUser,
    pub profile: User,
    pub session: AuthSession,
}

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub user: AuthUser,
    pub profile: User,
}

/// Registration failures, split by phase.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Nothing was persisted: invalid input or the identity collaborator refused.
    #[error(transparent)]
    Rejected(DomainError),
    /// The identity was created but the profile insert failed. The identity
    /// has been deleted again unless `compensated` is false.
    #[error("{source}")]
    ProfileFailed {
        source: DomainError,
        compensated: bool,
    },
}

pub struct AuthService {
    identity: Arc<dyn IdentityProvider>,
    repos: Arc<dyn RepositoryProvider>,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityProvider>, repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { identity, repos }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Sign in with the identity collaborator, then load the matching profile.
    ///
    /// A missing profile (or a failed lookup) is reported as `NotFound`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let session = self.identity.sign_in_with_password(email, password).await?;

        let profile = match self.repos.users().get_user_by_id(&session.user.id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                warn!(user_id = %session.user.id, "Identity signed in without a profile row");
                return Err(DomainError::not_found("User profile", "id", &session.user.id));
            }
            Err(e) => {
                error!(user_id = %session.user.id, error = %e, "Profile lookup failed");
                return Err(DomainError::not_found("User profile", "id", &session.user.id));
            }
        };

        info!(user_id = %profile.id, "User logged in");
        Ok(LoginOutcome {
            user: session.user.clone(),
            profile,
            session,
        })
    }

    /// Resolve a session token to the identity it was issued for.
    pub async fn current_user(&self, access_token: &str) -> DomainResult<AuthUser> {
        self.identity.get_user(access_token).await
    }

    // ── Registration ────────────────────────────────────────────

    /// Two-phase registration.
    ///
    /// 1. create the identity;
    /// 2. insert the profile row under the identity id.
    ///
    /// When phase 2 fails the identity from phase 1 is deleted before the
    /// profile error is returned.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: Option<&str>,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let role = match role {
            Some(raw) => raw.parse::<UserRole>().map_err(RegistrationError::Rejected)?,
            None => UserRole::default(),
        };

        let user = self
            .identity
            .sign_up(email, password)
            .await
            .map_err(RegistrationError::Rejected)?;

        let dto = CreateUserDto {
            id: user.id.clone(),
            email: user.email.clone(),
            full_name: full_name.to_string(),
            role,
        };

        match self.repos.users().create_user(dto).await {
            Ok(profile) => {
                metrics::counter!("registrations_total", "outcome" => "created").increment(1);
                info!(user_id = %profile.id, role = %profile.role, "New user registered");
                Ok(RegistrationOutcome { user, profile })
            }
            Err(source) => {
                metrics::counter!("registrations_total", "outcome" => "profile_failed")
                    .increment(1);
                warn!(user_id = %user.id, error = %source, "Profile insert failed; removing identity");

                let compensated = match self.identity.delete_user(&user.id).await {
                    Ok(()) => true,
                    Err(e) => {
                        error!(user_id = %user.id, error = %e, "Failed to remove orphaned identity");
                        false
                    }
                };

                Err(RegistrationError::ProfileFailed {
                    source,
                    compensated,
                })
            }
        }
    }

    /// Register the configured administrator unless an admin profile exists.
    pub async fn ensure_admin(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> DomainResult<Option<User>> {
        if self.repos.users().find_admin().await?.is_some() {
            return Ok(None);
        }

        match self
            .register(email, password, full_name, Some(UserRole::Admin.as_str()))
            .await
        {
            Ok(outcome) => {
                info!(email = %outcome.profile.email, "Bootstrap administrator created");
                Ok(Some(outcome.profile))
            }
            Err(RegistrationError::Rejected(DomainError::Conflict(_))) => {
                warn!(%email, "Bootstrap administrator identity already exists; skipping");
                Ok(None)
            }
            Err(RegistrationError::Rejected(e)) => Err(e),
            Err(RegistrationError::ProfileFailed { source, .. }) => Err(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContext;

    #[tokio::test]
    async fn register_defaults_to_agent_and_shares_identity_id() {
        let ctx = TestContext::new().await;
        let outcome = ctx
            .auth
            .register("field@example.com", "secret-pass", "Field Agent", None)
            .await
            .unwrap();

        assert_eq!(outcome.profile.id, outcome.user.id);
        assert_eq!(outcome.profile.role, UserRole::Agent);
        assert_eq!(outcome.profile.full_name, "Field Agent");
    }

    #[tokio::test]
    async fn invalid_role_is_rejected_before_identity_creation() {
        let ctx = TestContext::new().await;
        let err = ctx
            .auth
            .register("boss@example.com", "secret-pass", "Boss", Some("superuser"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrationError::Rejected(DomainError::Validation(_))));

        // The email is still free.
        ctx.auth
            .register("boss@example.com", "secret-pass", "Boss", Some("admin"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_profile_insert_removes_the_identity() {
        let ctx = TestContext::new().await;
        ctx.seed_profile("taken@example.com", "Existing Profile", UserRole::Agent)
            .await;

        let err = ctx
            .auth
            .register("taken@example.com", "secret-pass", "Newcomer", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::ProfileFailed {
                compensated: true,
                ..
            }
        ));

        let login = ctx.auth.login("taken@example.com", "secret-pass").await;
        assert!(matches!(login, Err(DomainError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn login_without_profile_is_not_found() {
        let ctx = TestContext::new().await;
        ctx.identity
            .sign_up("orphan@example.com", "secret-pass")
            .await
            .unwrap();

        let err = ctx
            .auth
            .login("orphan@example.com", "secret-pass")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn ensure_admin_runs_once() {
        let ctx = TestContext::new().await;
        let first = ctx
            .auth
            .ensure_admin("admin@example.com", "admin-pass", "Admin")
            .await
            .unwrap();
        assert_eq!(first.map(|u| u.role), Some(UserRole::Admin));

        let second = ctx
            .auth
            .ensure_admin("admin@example.com", "admin-pass", "Admin")
            .await
            .unwrap();
        assert!(second.is_none());
    }
}
