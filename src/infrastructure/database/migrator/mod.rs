//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_auth_identities;
mod m20250101_000003_create_photos;
mod m20250101_000004_create_leads;
mod m20250101_000005_create_gps_tracking;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_auth_identities::Migration),
            Box::new(m20250101_000003_create_photos::Migration),
            Box::new(m20250101_000004_create_leads::Migration),
            Box::new(m20250101_000005_create_gps_tracking::Migration),
        ]
    }
}
