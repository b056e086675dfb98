//! User profile domain entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::DomainError;

/// Role of a user. Only these two values are ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// Field agent: uploads photos, captures leads, reports location
    #[default]
    Agent,
    /// Administrator: reads aggregated activity, manages roles
    Admin,
}

impl UserRole {
    pub const ALLOWED: [&'static str; 2] = ["agent", "admin"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    /// Exact, case-sensitive match against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agent" => Ok(Self::Agent),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::Validation(format!(
                "Invalid role '{}': expected one of {}",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

/// User profile row. Shares its id with the identity record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// The slice of a user embedded into photos, leads and pings.
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    pub id: String,
    pub full_name: String,
    pub role: UserRole,
}

impl From<&User> for Creator {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            full_name: u.full_name.clone(),
            role: u.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_allowed_roles() {
        assert_eq!("agent".parse::<UserRole>().unwrap(), UserRole::Agent);
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
    }

    #[test]
    fn rejects_roles_outside_allow_list() {
        for raw in ["superuser", "Admin", "", " agent"] {
            let err = raw.parse::<UserRole>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{raw:?}");
        }
    }

    #[test]
    fn default_role_is_agent() {
        assert_eq!(UserRole::default(), UserRole::Agent);
        assert_eq!(UserRole::default().to_string(), "agent");
    }
}
