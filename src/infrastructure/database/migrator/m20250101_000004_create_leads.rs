//! Create leads table migration

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
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Leads::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Leads::UserId).string().not_null())
                    .col(ColumnDef::new(Leads::ContactName).string_len(255).not_null())
                    .col(ColumnDef::new(Leads::ContactPhone).string_len(64).not_null())
                    .col(ColumnDef::new(Leads::ContactEmail).string_len(255).not_null())
                    .col(ColumnDef::new(Leads::BusinessName).string_len(255).not_null())
                    .col(ColumnDef::new(Leads::Latitude).double().not_null())
                    .col(ColumnDef::new(Leads::Longitude).double().not_null())
                    .col(ColumnDef::new(Leads::Notes).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Leads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leads_user_id")
                            .from(Leads::Table, Leads::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leads_created_at")
                    .table(Leads::Table)
                    .col(Leads::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Leads {
    Table,
    Id,
    UserId,
    ContactName,
    ContactPhone,
    ContactEmail,
    BusinessName,
    Latitude,
    Longitude,
    Notes,
    CreatedAt,
}
