//! Barber shop image entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub barber_shop_id: Uuid,
    pub url: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::barber_shop::Entity",
        from = "Column::BarberShopId",
        to = "super::barber_shop::Column::Id"
    )]
    BarberShop,
}

impl Related<super::barber_shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarberShop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
