//! Barber service — barbers scoped to a parent shop

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::barber_shop::BarberShopService;
use crate::domain::{Barber, BarberDraft, DomainError, DomainResult, RepositoryProvider};
use crate::shared::{Page, PageRequest};

pub struct BarberService {
    repos: Arc<dyn RepositoryProvider>,
    barber_shops: Arc<BarberShopService>,
}

impl BarberService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, barber_shops: Arc<BarberShopService>) -> Self {
        Self { repos, barber_shops }
    }

    pub async fn save(&self, draft: BarberDraft, barber_shop_id: Uuid) -> DomainResult<Barber> {
        let shop = self.barber_shops.find_by_id(barber_shop_id).await?;
        let barber = Barber::create(draft, shop.id);
        let saved = self.repos.barbers().save(barber).await?;
        info!(barber_id = %saved.id, barber_shop_id = %shop.id, "Barber created");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<Barber> {
        self.repos
            .barbers()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Barber", id))
    }

    pub async fn update(&self, id: Uuid, draft: BarberDraft) -> DomainResult<()> {
        let mut barber = self.find_by_id(id).await?;
        barber.apply_update(draft);
        self.repos.barbers().update(barber).await?;
        info!(barber_id = %id, "Barber updated");
        Ok(())
    }

    pub async fn list_all_by_barber_shop_id(
        &self,
        barber_shop_id: Uuid,
        page: PageRequest,
    ) -> DomainResult<Page<Barber>> {
        self.barber_shops.ensure_exists(barber_shop_id).await?;
        self.repos
            .barbers()
            .find_all_by_barber_shop_id(barber_shop_id, page)
            .await
    }
}
