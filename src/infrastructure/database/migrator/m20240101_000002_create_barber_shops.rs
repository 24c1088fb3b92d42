//! Create barber_shops table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_addresses::Addresses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BarberShops::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BarberShops::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(BarberShops::Name).string().not_null())
                    .col(ColumnDef::new(BarberShops::ImageUrl).string().not_null())
                    .col(ColumnDef::new(BarberShops::AddressId).uuid().not_null())
                    .col(
                        ColumnDef::new(BarberShops::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_barber_shops_address")
                            .from(BarberShops::Table, BarberShops::AddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_barber_shops_created_at")
                    .table(BarberShops::Table)
                    .col(BarberShops::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BarberShops::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BarberShops {
    Table,
    Id,
    Name,
    ImageUrl,
    AddressId,
    CreatedAt,
}
