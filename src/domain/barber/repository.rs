use async_trait::async_trait;
use uuid::Uuid;

use super::model::Barber;
use crate::domain::DomainResult;
use crate::shared::{Page, PageRequest};

#[async_trait]
pub trait BarberRepository: Send + Sync {
    async fn save(&self, barber: Barber) -> DomainResult<Barber>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Barber>>;
    async fn update(&self, barber: Barber) -> DomainResult<()>;
    async fn find_all_by_barber_shop_id(
        &self,
        barber_shop_id: Uuid,
        page: PageRequest,
    ) -> DomainResult<Page<Barber>>;
}
