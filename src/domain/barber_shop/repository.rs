use async_trait::async_trait;
use uuid::Uuid;

use super::model::BarberShop;
use crate::domain::DomainResult;
use crate::shared::{Page, PageRequest};

/// Persistence of the shop row. Addresses and images have their own
/// repositories; reads return the assembled aggregate.
#[async_trait]
pub trait BarberShopRepository: Send + Sync {
    async fn save(&self, shop: BarberShop) -> DomainResult<BarberShop>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<BarberShop>>;
    async fn exists(&self, id: Uuid) -> DomainResult<bool>;
    async fn update(&self, shop: BarberShop) -> DomainResult<()>;
    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<BarberShop>>;
}
