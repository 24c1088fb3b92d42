//! SeaORM implementation of BarberRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};
use uuid::Uuid;

use super::db_err;
use crate::domain::{Barber, BarberRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::barber;
use crate::shared::{Page, PageRequest};

fn model_to_domain(m: barber::Model) -> Barber {
    Barber {
        id: m.id,
        name: m.name,
        barber_shop_id: m.barber_shop_id,
        created_at: m.created_at,
    }
}

pub struct SeaOrmBarberRepository {
    db: DatabaseConnection,
}

impl SeaOrmBarberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BarberRepository for SeaOrmBarberRepository {
    async fn save(&self, b: Barber) -> DomainResult<Barber> {
        let model = barber::ActiveModel {
            id: Set(b.id),
            name: Set(b.name),
            barber_shop_id: Set(b.barber_shop_id),
            created_at: Set(b.created_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Barber saved: {} ({}) at shop {}", result.name, result.id, result.barber_shop_id);
        Ok(model_to_domain(result))
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Barber>> {
        let model = barber::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, b: Barber) -> DomainResult<()> {
        let id = b.id;
        let model = barber::ActiveModel {
            id: Unchanged(id),
            name: Set(b.name),
            ..Default::default()
        };
        match model.update(&self.db).await {
            Ok(_) => {
                info!("Barber updated: {}", id);
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(DomainError::not_found("Barber", id)),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn find_all_by_barber_shop_id(
        &self,
        barber_shop_id: Uuid,
        page: PageRequest,
    ) -> DomainResult<Page<Barber>> {
        let query = barber::Entity::find()
            .filter(barber::Column::BarberShopId.eq(barber_shop_id))
            .order_by_asc(barber::Column::CreatedAt)
            .order_by_asc(barber::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.size)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(Page::new(items, page, total))
    }
}
