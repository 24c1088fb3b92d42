//! Create images table

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
                    .table(Images::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Images::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Images::BarberShopId).uuid().not_null())
                    .col(ColumnDef::new(Images::Url).string().not_null())
                    .col(
                        ColumnDef::new(Images::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_images_barber_shop")
                            .from(Images::Table, Images::BarberShopId)
                            .to(BarberShops::Table, BarberShops::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_images_barber_shop")
                    .table(Images::Table)
                    .col(Images::BarberShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Images::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Images {
    Table,
    Id,
    BarberShopId,
    Url,
    CreatedAt,
}
