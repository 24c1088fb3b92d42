//! SeaORM implementation of ImageRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::db_err;
use crate::domain::{DomainError, DomainResult, Image, ImageRepository};
use crate::infrastructure::database::entities::image;

pub(super) fn model_to_domain(m: image::Model) -> Image {
    Image {
        id: m.id,
        barber_shop_id: m.barber_shop_id,
        url: m.url,
        created_at: m.created_at,
    }
}

pub struct SeaOrmImageRepository {
    db: DatabaseConnection,
}

impl SeaOrmImageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepository for SeaOrmImageRepository {
    async fn save(&self, i: Image) -> DomainResult<Image> {
        let model = image::ActiveModel {
            id: Set(i.id),
            barber_shop_id: Set(i.barber_shop_id),
            url: Set(i.url),
            created_at: Set(i.created_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Image saved: {} for shop {}", result.id, result.barber_shop_id);
        Ok(model_to_domain(result))
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Image>> {
        let model = image::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn count_by_barber_shop_id(&self, barber_shop_id: Uuid) -> DomainResult<u64> {
        image::Entity::find()
            .filter(image::Column::BarberShopId.eq(barber_shop_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_all_by_barber_shop_id(&self, barber_shop_id: Uuid) -> DomainResult<Vec<Image>> {
        let models = image::Entity::find()
            .filter(image::Column::BarberShopId.eq(barber_shop_id))
            .order_by_asc(image::Column::CreatedAt)
            .order_by_asc(image::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = image::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Image", id));
        }
        info!("Image deleted: {}", id);
        Ok(())
    }
}
