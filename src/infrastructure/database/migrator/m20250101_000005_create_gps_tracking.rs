//! Create gps_tracking table
//!
//! Append-only location reports; read newest first by `timestamp`.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GpsTracking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GpsTracking::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GpsTracking::UserId).string().not_null())
                    .col(ColumnDef::new(GpsTracking::Latitude).double().not_null())
                    .col(ColumnDef::new(GpsTracking::Longitude).double().not_null())
                    .col(
                        ColumnDef::new(GpsTracking::ActivityType)
                            .string_len(50)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(GpsTracking::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gps_tracking_user_id")
                            .from(GpsTracking::Table, GpsTracking::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gps_tracking_timestamp")
                    .table(GpsTracking::Table)
                    .col(GpsTracking::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gps_tracking_user_id")
                    .table(GpsTracking::Table)
                    .col(GpsTracking::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GpsTracking::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum GpsTracking {
    Table,
    Id,
    UserId,
    Latitude,
    Longitude,
    ActivityType,
    Timestamp,
}
