//! Barber shop service — create/read/update/list of shop aggregates

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::address::AddressService;
use crate::domain::{BarberShop, BarberShopDraft, DomainError, DomainResult, RepositoryProvider};
use crate::shared::{Page, PageRequest};

pub struct BarberShopService {
    repos: Arc<dyn RepositoryProvider>,
    addresses: AddressService,
}

impl BarberShopService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            addresses: AddressService::new(repos.clone()),
            repos,
        }
    }

    /// Persist the address, then the shop under a new id.
    ///
    /// The two writes are independent: if the shop insert fails the address
    /// row stays behind.
    pub async fn create(&self, draft: BarberShopDraft) -> DomainResult<BarberShop> {
        let address = self.addresses.save(draft.address).await?;
        let shop = BarberShop::create(draft.name, draft.image_url, address);
        let saved = self.repos.barber_shops().save(shop).await?;
        info!(barber_shop_id = %saved.id, name = %saved.name, "Barber shop created");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<BarberShop> {
        self.repos
            .barber_shops()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("BarberShop", id))
    }

    /// Fails with `NotFound` unless a shop with this id exists.
    pub async fn ensure_exists(&self, id: Uuid) -> DomainResult<()> {
        if self.repos.barber_shops().exists(id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("BarberShop", id))
        }
    }

    /// Update the shop's address in place, then its name and logo URL.
    pub async fn update(&self, id: Uuid, draft: BarberShopDraft) -> DomainResult<()> {
        let mut shop = self.find_by_id(id).await?;
        shop.address = self.addresses.update(&shop.address, draft.address.clone()).await?;
        shop.apply_update(&draft);
        self.repos.barber_shops().update(shop).await?;
        info!(barber_shop_id = %id, "Barber shop updated");
        Ok(())
    }

    pub async fn list_all(&self, page: PageRequest) -> DomainResult<Page<BarberShop>> {
        self.repos.barber_shops().find_all(page).await
    }
}
