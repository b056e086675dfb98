//! # Field Operations Service
//!
//! Backend for field agents: account registration and login, geotagged
//! photos, sales leads, GPS position pings and role management.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository traits and the identity collaborator
//! - **application**: use cases (authentication, user management)
//! - **infrastructure**: SeaORM store, local identity provider, crypto
//! - **interfaces**: REST API with Swagger documentation
//! - **client**: periodic GPS reporter for a signed-in agent
//! - **server**: process lifecycle (config, tracing, graceful shutdown)

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::{create_api_router, AppState};
