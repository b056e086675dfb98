//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod identity;

pub use database::{init_database, DatabaseConfig};
pub use identity::{LocalIdentityProvider, LocalIdentitySettings};
