//! SeaORM implementation of AddressRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, Unchanged};
use uuid::Uuid;

use super::db_err;
use crate::domain::{Address, AddressRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::address;

pub(super) fn model_to_domain(m: address::Model) -> Address {
    Address {
        id: m.id,
        street: m.street,
        district: m.district,
        city: m.city,
        number: m.number,
    }
}

pub struct SeaOrmAddressRepository {
    db: DatabaseConnection,
}

impl SeaOrmAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn save(&self, a: Address) -> DomainResult<Address> {
        let model = address::ActiveModel {
            id: Set(a.id),
            street: Set(a.street),
            district: Set(a.district),
            city: Set(a.city),
            number: Set(a.number),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Address saved: {}", result.id);
        Ok(model_to_domain(result))
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Address>> {
        let model = address::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, a: Address) -> DomainResult<()> {
        let id = a.id;
        let model = address::ActiveModel {
            id: Unchanged(id),
            street: Set(a.street),
            district: Set(a.district),
            city: Set(a.city),
            number: Set(a.number),
        };
        match model.update(&self.db).await {
            Ok(_) => {
                info!("Address updated: {}", id);
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(DomainError::not_found("Address", id)),
            Err(e) => Err(db_err(e)),
        }
    }
}
