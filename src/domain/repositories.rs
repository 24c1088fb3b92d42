//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use async_trait::async_trait;

use super::address::AddressRepository;
use super::barber::BarberRepository;
use super::barber_shop::BarberShopRepository;
use super::image::ImageRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider, id: Uuid) -> DomainResult<()> {
///     let shop = repos.barber_shops().find_by_id(id).await?;
///     let images = repos.images().count_by_barber_shop_id(id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn addresses(&self) -> &dyn AddressRepository;
    fn barber_shops(&self) -> &dyn BarberShopRepository;
    fn barbers(&self) -> &dyn BarberRepository;
    fn images(&self) -> &dyn ImageRepository;

    /// Cheap round-trip to the backing store, used by the health check.
    async fn ping(&self) -> DomainResult<()>;
}
