//! SeaORM implementation of RepositoryProvider

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::domain::{
    AddressRepository, BarberRepository, BarberShopRepository, DomainResult, ImageRepository,
    RepositoryProvider,
};

use super::{
    db_err, SeaOrmAddressRepository, SeaOrmBarberRepository, SeaOrmBarberShopRepository,
    SeaOrmImageRepository,
};

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let shop = repos.barber_shops().find_by_id(id).await?;
/// let barbers = repos.barbers().find_all_by_barber_shop_id(id, page).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    addresses: SeaOrmAddressRepository,
    barber_shops: SeaOrmBarberShopRepository,
    barbers: SeaOrmBarberRepository,
    images: SeaOrmImageRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            addresses: SeaOrmAddressRepository::new(db.clone()),
            barber_shops: SeaOrmBarberShopRepository::new(db.clone()),
            barbers: SeaOrmBarberRepository::new(db.clone()),
            images: SeaOrmImageRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn addresses(&self) -> &dyn AddressRepository {
        &self.addresses
    }

    fn barber_shops(&self) -> &dyn BarberShopRepository {
        &self.barber_shops
    }

    fn barbers(&self) -> &dyn BarberRepository {
        &self.barbers
    }

    fn images(&self) -> &dyn ImageRepository {
        &self.images
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_db;

    #[tokio::test]
    async fn ping_succeeds_on_a_live_connection() {
        let repos = SeaOrmRepositoryProvider::new(test_db().await);
        repos.ping().await.unwrap();
    }

    #[tokio::test]
    async fn ping_fails_once_the_pool_is_closed() {
        let db = test_db().await;
        let repos = SeaOrmRepositoryProvider::new(db.clone());
        db.close().await.unwrap();
        assert!(repos.ping().await.is_err());
    }
}
