use async_trait::async_trait;
use uuid::Uuid;

use super::model::Address;
use crate::domain::DomainResult;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn save(&self, address: Address) -> DomainResult<Address>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Address>>;
    async fn update(&self, address: Address) -> DomainResult<()>;
}
