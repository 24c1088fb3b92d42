//! SeaORM implementation of BarberShopRepository
//!
//! A shop row is assembled with its address (joined) and its images (one
//! extra query per page).

use std::collections::HashMap;

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};
use uuid::Uuid;

use super::address_repository::model_to_domain as address_to_domain;
use super::db_err;
use super::image_repository::model_to_domain as image_to_domain;
use crate::domain::{BarberShop, BarberShopRepository, DomainError, DomainResult, Image};
use crate::infrastructure::database::entities::{address, barber_shop, image};
use crate::shared::{Page, PageRequest};

fn assemble(
    shop: barber_shop::Model,
    address: Option<address::Model>,
    images: Vec<Image>,
) -> DomainResult<BarberShop> {
    let address = address.ok_or_else(|| DomainError::not_found("Address", shop.address_id))?;
    Ok(BarberShop {
        id: shop.id,
        name: shop.name,
        image_url: shop.image_url,
        address: address_to_domain(address),
        images,
        created_at: shop.created_at,
    })
}

pub struct SeaOrmBarberShopRepository {
    db: DatabaseConnection,
}

impl SeaOrmBarberShopRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Images of every shop in `shop_ids`, oldest first, grouped by shop.
    async fn images_by_shop(&self, shop_ids: Vec<Uuid>) -> DomainResult<HashMap<Uuid, Vec<Image>>> {
        if shop_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = image::Entity::find()
            .filter(image::Column::BarberShopId.is_in(shop_ids))
            .order_by_asc(image::Column::CreatedAt)
            .order_by_asc(image::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut grouped: HashMap<Uuid, Vec<Image>> = HashMap::new();
        for m in models {
            grouped.entry(m.barber_shop_id).or_default().push(image_to_domain(m));
        }
        Ok(grouped)
    }
}

#[async_trait]
impl BarberShopRepository for SeaOrmBarberShopRepository {
    async fn save(&self, shop: BarberShop) -> DomainResult<BarberShop> {
        let model = barber_shop::ActiveModel {
            id: Set(shop.id),
            name: Set(shop.name.clone()),
            image_url: Set(shop.image_url.clone()),
            address_id: Set(shop.address.id),
            created_at: Set(shop.created_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Barber shop saved: {} ({})", result.name, result.id);
        Ok(shop)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<BarberShop>> {
        let row = barber_shop::Entity::find_by_id(id)
            .find_also_related(address::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some((shop, address)) = row else {
            return Ok(None);
        };
        let images = self
            .images_by_shop(vec![shop.id])
            .await?
            .remove(&shop.id)
            .unwrap_or_default();
        assemble(shop, address, images).map(Some)
    }

    async fn exists(&self, id: Uuid) -> DomainResult<bool> {
        let count = barber_shop::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn update(&self, shop: BarberShop) -> DomainResult<()> {
        let id = shop.id;
        let model = barber_shop::ActiveModel {
            id: Unchanged(id),
            name: Set(shop.name),
            image_url: Set(shop.image_url),
            ..Default::default()
        };
        match model.update(&self.db).await {
            Ok(_) => {
                info!("Barber shop updated: {}", id);
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(DomainError::not_found("BarberShop", id)),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<BarberShop>> {
        let total = barber_shop::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let rows = barber_shop::Entity::find()
            .order_by_asc(barber_shop::Column::CreatedAt)
            .order_by_asc(barber_shop::Column::Id)
            .offset(page.offset())
            .limit(page.size)
            .find_also_related(address::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut images = self
            .images_by_shop(rows.iter().map(|(shop, _)| shop.id).collect())
            .await?;
        let items = rows
            .into_iter()
            .map(|(shop, address)| {
                let shop_images = images.remove(&shop.id).unwrap_or_default();
                assemble(shop, address, shop_images)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page::new(items, page, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, AddressDraft, AddressRepository, ImageRepository};
    use crate::infrastructure::database::repositories::{
        test_db, SeaOrmAddressRepository, SeaOrmImageRepository,
    };

    async fn seed(db: &DatabaseConnection, name: &str) -> BarberShop {
        let address = SeaOrmAddressRepository::new(db.clone())
            .save(Address::create(AddressDraft {
                city: "Test".into(),
                ..Default::default()
            }))
            .await
            .unwrap();
        SeaOrmBarberShopRepository::new(db.clone())
            .save(BarberShop::create(name.into(), "https://www.google.com".into(), address))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn find_by_id_loads_address_and_images() {
        let db = test_db().await;
        let shop = seed(&db, "Test").await;
        let image = Image {
            id: Uuid::new_v4(),
            barber_shop_id: shop.id,
            url: "memory://a.png".into(),
            created_at: chrono::Utc::now(),
        };
        SeaOrmImageRepository::new(db.clone()).save(image.clone()).await.unwrap();

        let repo = SeaOrmBarberShopRepository::new(db);
        let found = repo.find_by_id(shop.id).await.unwrap().unwrap();

        assert_eq!(found.name, "Test");
        assert_eq!(found.address, shop.address);
        assert_eq!(found.images.len(), 1);
        assert_eq!(found.images[0].url, image.url);
    }

    #[tokio::test]
    async fn find_by_id_of_unknown_shop_is_none() {
        let repo = SeaOrmBarberShopRepository::new(test_db().await);
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(!repo.exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn update_changes_name_and_image_url_only() {
        let db = test_db().await;
        let mut shop = seed(&db, "Old").await;
        let repo = SeaOrmBarberShopRepository::new(db);

        shop.name = "New".into();
        shop.image_url = "https://new.example".into();
        repo.update(shop.clone()).await.unwrap();

        let found = repo.find_by_id(shop.id).await.unwrap().unwrap();
        assert_eq!(found.name, "New");
        assert_eq!(found.image_url, "https://new.example");
        assert_eq!(found.created_at, shop.created_at);
        assert_eq!(found.address.id, shop.address.id);
    }

    #[tokio::test]
    async fn find_all_pages_through_shops() {
        let db = test_db().await;
        for name in ["A", "B", "C"] {
            seed(&db, name).await;
        }
        let repo = SeaOrmBarberShopRepository::new(db);

        let all = repo.find_all(PageRequest::new(0, 20)).await.unwrap();
        assert_eq!(all.items.len(), 3);
        assert_eq!(all.total, 3);
        assert_eq!(all.total_pages, 1);

        let second = repo.find_all(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.total_pages, 2);
    }
}
