use chrono::{DateTime, Utc};

/// Account as seen by the identity collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

/// Session issued on sign-in. Handed back to the client opaquely.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
    /// Unix timestamp
    pub expires_at: i64,
    pub user: AuthUser,
}
