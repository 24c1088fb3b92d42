//! Create barbers table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_barber_shops::BarberShops;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Barbers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Barbers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Barbers::Name).string().not_null())
                    .col(ColumnDef::new(Barbers::BarberShopId).uuid().not_null())
                    .col(
                        ColumnDef::new(Barbers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_barbers_barber_shop")
                            .from(Barbers::Table, Barbers::BarberShopId)
                            .to(BarberShops::Table, BarberShops::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_barbers_barber_shop")
                    .table(Barbers::Table)
                    .col(Barbers::BarberShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Barbers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Barbers {
    Table,
    Id,
    Name,
    BarberShopId,
    CreatedAt,
}
