//! Application layer — use-case orchestration over the domain ports
//!
//! HTTP handlers are thin wrappers that delegate to these services.

pub mod services;

use std::sync::Arc;

pub use services::{AddressService, BarberService, BarberShopService, ImageService};

use crate::domain::{ImagePolicy, ObjectStorage, RepositoryProvider};

/// All application services, wired by hand from their collaborators.
#[derive(Clone)]
pub struct ServiceRegistry {
    pub barber_shops: Arc<BarberShopService>,
    pub barbers: Arc<BarberService>,
    pub images: Arc<ImageService>,
}

impl ServiceRegistry {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        storage: Arc<dyn ObjectStorage>,
        policy: ImagePolicy,
    ) -> Self {
        let barber_shops = Arc::new(BarberShopService::new(repos.clone()));
        let barbers = Arc::new(BarberService::new(repos.clone(), barber_shops.clone()));
        let images = Arc::new(ImageService::new(
            repos,
            barber_shops.clone(),
            storage,
            policy,
        ));
        Self {
            barber_shops,
            barbers,
            images,
        }
    }
}
