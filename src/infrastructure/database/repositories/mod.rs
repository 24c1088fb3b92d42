//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod address_repository;
pub mod barber_repository;
pub mod barber_shop_repository;
pub mod image_repository;
pub mod repository_provider;

pub use address_repository::SeaOrmAddressRepository;
pub use barber_repository::SeaOrmBarberRepository;
pub use barber_shop_repository::SeaOrmBarberShopRepository;
pub use image_repository::SeaOrmImageRepository;
pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Fresh in-memory SQLite database with all migrations applied.
#[cfg(test)]
pub(crate) async fn test_db() -> sea_orm::DatabaseConnection {
    use sea_orm_migration::MigratorTrait;

    use super::migrator::Migrator;
    use super::{init_database, DatabaseConfig};

    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let db = init_database(&config).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}
