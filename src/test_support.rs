//! Shared fixtures for unit tests

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;

use crate::application::{AuthService, UserService};
use crate::domain::{CreateUserDto, IdentityProvider, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::infrastructure::{init_database, DatabaseConfig, LocalIdentityProvider, LocalIdentitySettings};

pub fn test_identity_settings() -> LocalIdentitySettings {
    LocalIdentitySettings {
        jwt: JwtConfig {
            secret: "unit-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "field-ops-test".to_string(),
        },
        bcrypt_cost: 4,
    }
}

/// Migrated in-memory database with every service wired on top.
pub struct TestContext {
    pub repos: Arc<dyn RepositoryProvider>,
    pub identity: Arc<dyn IdentityProvider>,
    pub auth: AuthService,
    pub users: UserService,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let identity: Arc<dyn IdentityProvider> =
            Arc::new(LocalIdentityProvider::new(db.clone(), test_identity_settings()));

        Self {
            auth: AuthService::new(Arc::clone(&identity), Arc::clone(&repos)),
            users: UserService::new(Arc::clone(&repos)),
            repos,
            identity,
        }
    }

    /// Insert a profile row without an identity behind it.
    pub async fn seed_profile(&self, email: &str, full_name: &str, role: UserRole) -> User {
        self.repos
            .users()
            .create_user(CreateUserDto {
                id: uuid::Uuid::new_v4().to_string(),
                email: email.to_string(),
                full_name: full_name.to_string(),
                role,
            })
            .await
            .unwrap()
    }
}
