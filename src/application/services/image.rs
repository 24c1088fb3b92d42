//! Image service — upload, list and removal of shop images

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::barber_shop::BarberShopService;
use crate::domain::{
    DomainError, DomainResult, Image, ImagePolicy, ImageUpload, ObjectStorage, RepositoryProvider,
};

pub struct ImageService {
    repos: Arc<dyn RepositoryProvider>,
    barber_shops: Arc<BarberShopService>,
    storage: Arc<dyn ObjectStorage>,
    policy: ImagePolicy,
}

impl ImageService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        barber_shops: Arc<BarberShopService>,
        storage: Arc<dyn ObjectStorage>,
        policy: ImagePolicy,
    ) -> Self {
        Self {
            repos,
            barber_shops,
            storage,
            policy,
        }
    }

    /// Store the file and record it against the shop.
    ///
    /// Checks run in order: shop exists, payload size, image count.
    pub async fn upload(&self, barber_shop_id: Uuid, upload: ImageUpload) -> DomainResult<Image> {
        self.barber_shops.ensure_exists(barber_shop_id).await?;
        self.policy.check_size(&upload)?;

        let current = self.repos.images().count_by_barber_shop_id(barber_shop_id).await?;
        self.policy.check_capacity(barber_shop_id, current)?;

        let image_id = Uuid::new_v4();
        let key = upload.storage_key(barber_shop_id, image_id);
        let size = upload.bytes.len();
        let url = self
            .storage
            .upload(&key, upload.bytes, &upload.content_type)
            .await?;

        let image = Image {
            id: image_id,
            barber_shop_id,
            url: url.clone(),
            created_at: Utc::now(),
        };

        match self.repos.images().save(image).await {
            Ok(saved) => {
                metrics::counter!("barber_shop_images_uploaded_total").increment(1);
                info!(barber_shop_id = %barber_shop_id, image_id = %saved.id, size, "Image uploaded");
                Ok(saved)
            }
            Err(e) => {
                // The record is missing, so the object would be unreachable.
                if let Err(cleanup) = self.storage.delete(&url).await {
                    warn!(url = %url, error = %cleanup, "Failed to remove orphaned image object");
                }
                Err(e)
            }
        }
    }

    pub async fn list_by_barber_shop_id(&self, barber_shop_id: Uuid) -> DomainResult<Vec<Image>> {
        self.barber_shops.ensure_exists(barber_shop_id).await?;
        self.repos.images().find_all_by_barber_shop_id(barber_shop_id).await
    }

    /// Remove the stored object, then the record.
    pub async fn delete(&self, barber_shop_id: Uuid, image_id: Uuid) -> DomainResult<()> {
        let image = self
            .repos
            .images()
            .find_by_id(image_id)
            .await?
            .filter(|image| image.barber_shop_id == barber_shop_id)
            .ok_or_else(|| DomainError::not_found("Image", image_id))?;

        self.storage.delete(&image.url).await?;
        self.repos.images().delete(image.id).await?;
        info!(barber_shop_id = %barber_shop_id, image_id = %image_id, "Image deleted");
        Ok(())
    }
}
