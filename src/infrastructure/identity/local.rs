//! Identity provider backed by the service's own database.
//!
//! Credentials live in `auth_identities`, hashed with bcrypt. Sessions are
//! stateless HS256 access tokens; a token stays valid until it expires or
//! its identity is deleted.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{debug, info};

use crate::domain::{AuthSession, AuthUser, DomainError, DomainResult, IdentityProvider};
use crate::infrastructure::crypto::jwt::{create_token, verify_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password, DEFAULT_COST};
use crate::infrastructure::database::entities::identity;

const INVALID_CREDENTIALS: &str = "Invalid login credentials";

#[derive(Clone)]
pub struct LocalIdentitySettings {
    pub jwt: JwtConfig,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for LocalIdentitySettings {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: DEFAULT_COST,
        }
    }
}

pub struct LocalIdentityProvider {
    db: DatabaseConnection,
    settings: LocalIdentitySettings,
}

impl LocalIdentityProvider {
    pub fn new(db: DatabaseConnection, settings: LocalIdentitySettings) -> Self {
        Self { db, settings }
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<identity::Model>> {
        Ok(identity::Entity::find()
            .filter(identity::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn to_auth_user(model: identity::Model) -> AuthUser {
    AuthUser {
        id: model.id,
        email: model.email,
        created_at: model.created_at,
        last_sign_in_at: model.last_sign_in_at,
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthSession> {
        let email = normalize_email(email);

        let Some(record) = self.find_by_email(&email).await? else {
            debug!(%email, "Sign-in for unknown identity");
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        };

        if !verify_password(password, &record.password_hash).unwrap_or(false) {
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let mut active: identity::ActiveModel = record.into();
        active.last_sign_in_at = Set(Some(Utc::now()));
        let record = active.update(&self.db).await?;

        let (access_token, claims) = create_token(&record.id, &record.email, &self.settings.jwt)
            .map_err(|e| DomainError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(AuthSession {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.settings.jwt.expires_in_secs(),
            expires_at: claims.exp,
            user: to_auth_user(record),
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> DomainResult<AuthUser> {
        let email = normalize_email(email);

        if self.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict("User already registered".into()));
        }

        let password_hash = hash_password(password, self.settings.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;

        let record = identity::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
            last_sign_in_at: Set(None),
        }
        .insert(&self.db)
        .await?;

        info!(identity_id = %record.id, "Identity created");
        Ok(to_auth_user(record))
    }

    async fn get_user(&self, access_token: &str) -> DomainResult<AuthUser> {
        let claims = verify_token(access_token, &self.settings.jwt)
            .map_err(|e| DomainError::Unauthorized(format!("Invalid session token: {}", e)))?;

        if claims.is_expired() {
            return Err(DomainError::Unauthorized("Session token has expired".into()));
        }

        identity::Entity::find_by_id(claims.sub.as_str())
            .one(&self.db)
            .await?
            .map(to_auth_user)
            .ok_or_else(|| DomainError::Unauthorized("User from session token not found".into()))
    }

    async fn delete_user(&self, id: &str) -> DomainResult<()> {
        let result = identity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Identity", "id", id));
        }
        info!(identity_id = %id, "Identity deleted");
        Ok(())
    }
}
