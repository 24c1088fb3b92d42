//! In-memory repositories for development and testing
//!
//! Each table is a `DashMap` keyed by id. Rows carry an insertion sequence
//! number so listings come back in insertion order, like the SQL store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{
    Address, AddressRepository, Barber, BarberRepository, BarberShop, BarberShopRepository,
    DomainError, DomainResult, Image, ImageRepository, RepositoryProvider,
};
use crate::shared::{Page, PageRequest};

#[derive(Clone)]
struct Row<T> {
    seq: u64,
    value: T,
}

type Table<T> = Arc<DashMap<Uuid, Row<T>>>;

#[derive(Clone, Default)]
struct Sequence(Arc<AtomicU64>);

impl Sequence {
    fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

/// Rows of `table` matching `filter`, in insertion order.
fn ordered<T: Clone>(table: &DashMap<Uuid, Row<T>>, filter: impl Fn(&T) -> bool) -> Vec<T> {
    let mut rows: Vec<Row<T>> = table
        .iter()
        .filter(|entry| filter(&entry.value().value))
        .map(|entry| entry.value().clone())
        .collect();
    rows.sort_by_key(|row| row.seq);
    rows.into_iter().map(|row| row.value).collect()
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.size as usize)
        .collect();
    Page::new(items, page, total)
}

fn missing(entity: &'static str, id: Uuid) -> DomainError {
    DomainError::not_found(entity, id)
}

// ── Addresses ───────────────────────────────────────────────────

pub struct InMemoryAddressRepository {
    rows: Table<Address>,
    seq: Sequence,
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn save(&self, address: Address) -> DomainResult<Address> {
        let row = Row {
            seq: self.seq.next(),
            value: address.clone(),
        };
        self.rows.insert(address.id, row);
        Ok(address)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Address>> {
        Ok(self.rows.get(&id).map(|row| row.value.clone()))
    }

    async fn update(&self, address: Address) -> DomainResult<()> {
        let mut row = self
            .rows
            .get_mut(&address.id)
            .ok_or_else(|| missing("Address", address.id))?;
        row.value = address;
        Ok(())
    }
}

// ── Barber shops ────────────────────────────────────────────────

/// Shop row as stored: the address is referenced by id only.
#[derive(Clone)]
struct ShopRow {
    id: Uuid,
    name: String,
    image_url: String,
    address_id: Uuid,
    created_at: DateTime<Utc>,
}

pub struct InMemoryBarberShopRepository {
    rows: Table<ShopRow>,
    addresses: Table<Address>,
    images: Table<Image>,
    seq: Sequence,
}

impl InMemoryBarberShopRepository {
    fn assemble(&self, row: ShopRow) -> DomainResult<BarberShop> {
        let address = self
            .addresses
            .get(&row.address_id)
            .map(|a| a.value.clone())
            .ok_or_else(|| missing("Address", row.address_id))?;
        let images = ordered(&self.images, |image| image.barber_shop_id == row.id);
        Ok(BarberShop {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            address,
            images,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl BarberShopRepository for InMemoryBarberShopRepository {
    async fn save(&self, shop: BarberShop) -> DomainResult<BarberShop> {
        if !self.addresses.contains_key(&shop.address.id) {
            return Err(missing("Address", shop.address.id));
        }
        let row = ShopRow {
            id: shop.id,
            name: shop.name.clone(),
            image_url: shop.image_url.clone(),
            address_id: shop.address.id,
            created_at: shop.created_at,
        };
        self.rows.insert(
            shop.id,
            Row {
                seq: self.seq.next(),
                value: row,
            },
        );
        Ok(shop)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<BarberShop>> {
        let row = self.rows.get(&id).map(|row| row.value.clone());
        row.map(|row| self.assemble(row)).transpose()
    }

    async fn exists(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.rows.contains_key(&id))
    }

    async fn update(&self, shop: BarberShop) -> DomainResult<()> {
        let mut row = self
            .rows
            .get_mut(&shop.id)
            .ok_or_else(|| missing("BarberShop", shop.id))?;
        row.value.name = shop.name;
        row.value.image_url = shop.image_url;
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<BarberShop>> {
        let rows = paginate(ordered(&self.rows, |_| true), page);
        let items = rows
            .items
            .into_iter()
            .map(|row| self.assemble(row))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, page, rows.total))
    }
}

// ── Barbers ─────────────────────────────────────────────────────

pub struct InMemoryBarberRepository {
    rows: Table<Barber>,
    shops: Table<ShopRow>,
    seq: Sequence,
}

#[async_trait]
impl BarberRepository for InMemoryBarberRepository {
    async fn save(&self, barber: Barber) -> DomainResult<Barber> {
        if !self.shops.contains_key(&barber.barber_shop_id) {
            return Err(missing("BarberShop", barber.barber_shop_id));
        }
        self.rows.insert(
            barber.id,
            Row {
                seq: self.seq.next(),
                value: barber.clone(),
            },
        );
        Ok(barber)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Barber>> {
        Ok(self.rows.get(&id).map(|row| row.value.clone()))
    }

    async fn update(&self, barber: Barber) -> DomainResult<()> {
        let mut row = self
            .rows
            .get_mut(&barber.id)
            .ok_or_else(|| missing("Barber", barber.id))?;
        row.value.name = barber.name;
        Ok(())
    }

    async fn find_all_by_barber_shop_id(
        &self,
        barber_shop_id: Uuid,
        page: PageRequest,
    ) -> DomainResult<Page<Barber>> {
        let barbers = ordered(&self.rows, |b| b.barber_shop_id == barber_shop_id);
        Ok(paginate(barbers, page))
    }
}

// ── Images ──────────────────────────────────────────────────────

pub struct InMemoryImageRepository {
    rows: Table<Image>,
    seq: Sequence,
}

#[async_trait]
impl ImageRepository for InMemoryImageRepository {
    async fn save(&self, image: Image) -> DomainResult<Image> {
        self.rows.insert(
            image.id,
            Row {
                seq: self.seq.next(),
                value: image.clone(),
            },
        );
        Ok(image)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Image>> {
        Ok(self.rows.get(&id).map(|row| row.value.clone()))
    }

    async fn count_by_barber_shop_id(&self, barber_shop_id: Uuid) -> DomainResult<u64> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().value.barber_shop_id == barber_shop_id)
            .count() as u64)
    }

    async fn find_all_by_barber_shop_id(&self, barber_shop_id: Uuid) -> DomainResult<Vec<Image>> {
        Ok(ordered(&self.rows, |image| image.barber_shop_id == barber_shop_id))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| missing("Image", id))
    }
}

// ── Provider ────────────────────────────────────────────────────

/// Repository provider backed by process memory.
pub struct InMemoryRepositoryProvider {
    addresses: InMemoryAddressRepository,
    barber_shops: InMemoryBarberShopRepository,
    barbers: InMemoryBarberRepository,
    images: InMemoryImageRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let seq = Sequence::default();
        let addresses: Table<Address> = Arc::default();
        let shops: Table<ShopRow> = Arc::default();
        let barbers: Table<Barber> = Arc::default();
        let images: Table<Image> = Arc::default();

        Self {
            addresses: InMemoryAddressRepository {
                rows: addresses.clone(),
                seq: seq.clone(),
            },
            barber_shops: InMemoryBarberShopRepository {
                rows: shops.clone(),
                addresses,
                images: images.clone(),
                seq: seq.clone(),
            },
            barbers: InMemoryBarberRepository {
                rows: barbers,
                shops,
                seq: seq.clone(),
            },
            images: InMemoryImageRepository { rows: images, seq },
        }
    }

    /// Number of stored addresses, including ones no shop points at.
    pub fn address_count(&self) -> usize {
        self.addresses.rows.len()
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
    fn addresses(&self) -> &dyn AddressRepository {
        &self.addresses
    }

    fn barber_shops(&self) -> &dyn BarberShopRepository {
        &self.barber_shops
    }

    fn barbers(&self) -> &dyn BarberRepository {
        &self.barbers
    }

    fn images(&self) -> &dyn ImageRepository {
        &self.images
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AddressDraft;

    fn address() -> Address {
        Address::create(AddressDraft::default())
    }

    #[tokio::test]
    async fn shop_save_requires_a_stored_address() {
        let repos = InMemoryRepositoryProvider::new();
        let shop = BarberShop::create("A".into(), "https://a".into(), address());

        let err = repos.barber_shops().save(shop).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Address", .. }));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order_across_pages() {
        let repos = InMemoryRepositoryProvider::new();
        for name in ["A", "B", "C", "D", "E"] {
            let address = repos.addresses().save(address()).await.unwrap();
            let shop = BarberShop::create(name.into(), "https://x".into(), address);
            repos.barber_shops().save(shop).await.unwrap();
        }

        let second = repos.barber_shops().find_all(PageRequest::new(1, 2)).await.unwrap();

        let names: Vec<_> = second.items.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["C", "D"]);
        assert_eq!(second.total, 5);
        assert_eq!(second.total_pages, 3);
    }

    #[tokio::test]
    async fn image_delete_of_unknown_id_is_not_found() {
        let repos = InMemoryRepositoryProvider::new();
        let err = repos.images().delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Image", .. }));
    }
}
