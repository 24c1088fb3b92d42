use async_trait::async_trait;
use uuid::Uuid;

use super::model::Image;
use crate::domain::DomainResult;

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn save(&self, image: Image) -> DomainResult<Image>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Image>>;
    async fn count_by_barber_shop_id(&self, barber_shop_id: Uuid) -> DomainResult<u64>;
    async fn find_all_by_barber_shop_id(&self, barber_shop_id: Uuid) -> DomainResult<Vec<Image>>;
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
