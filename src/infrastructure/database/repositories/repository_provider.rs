//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    GpsPingRepositoryInterface, LeadRepositoryInterface, PhotoRepositoryInterface,
    RepositoryProvider, UserRepositoryInterface,
};

use super::gps_repository::GpsPingRepository;
use super::lead_repository::LeadRepository;
use super::photo_repository::PhotoRepository;
use super::user_repository::UserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    users: UserRepository,
    photos: PhotoRepository,
    leads: LeadRepository,
    gps_pings: GpsPingRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            photos: PhotoRepository::new(db.clone()),
            leads: LeadRepository::new(db.clone()),
            gps_pings: GpsPingRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }

    fn photos(&self) -> &dyn PhotoRepositoryInterface {
        &self.photos
    }

    fn leads(&self) -> &dyn LeadRepositoryInterface {
        &self.leads
    }

    fn gps_pings(&self) -> &dyn GpsPingRepositoryInterface {
        &self.gps_pings
    }
}
