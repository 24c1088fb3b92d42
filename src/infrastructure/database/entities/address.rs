//! Address entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub street: String,
    pub district: String,
    pub city: String,
    pub number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::barber_shop::Entity")]
    BarberShop,
}

impl Related<super::barber_shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarberShop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
