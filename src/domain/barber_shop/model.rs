//! Barber shop domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::address::{Address, AddressDraft};
use crate::domain::image::Image;

/// Barber shop aggregate root.
///
/// `id` and `created_at` are fixed when the shop is created. Barbers point at
/// their shop and are not part of the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct BarberShop {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub address: Address,
    pub images: Vec<Image>,
    pub created_at: DateTime<Utc>,
}

/// Shop fields supplied by a client for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarberShopDraft {
    pub name: String,
    pub image_url: String,
    pub address: AddressDraft,
}

impl BarberShop {
    /// Build a new shop around an already persisted address.
    pub fn create(name: String, image_url: String, address: Address) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            image_url,
            address,
            images: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Only the name and logo URL are replaced; identity, creation time and
    /// address identity stay as they are.
    pub fn apply_update(&mut self, draft: &BarberShopDraft) {
        self.name = draft.name.clone();
        self.image_url = draft.image_url.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::create(AddressDraft {
            street: "Test".into(),
            district: "Test".into(),
            city: "Test".into(),
            number: "42".into(),
        })
    }

    #[test]
    fn create_starts_without_images() {
        let shop = BarberShop::create("Test".into(), "https://www.google.com".into(), address());
        assert!(shop.images.is_empty());
        assert_eq!(shop.name, "Test");
    }

    #[test]
    fn apply_update_touches_only_name_and_image_url() {
        let mut shop = BarberShop::create("Old".into(), "https://old.example".into(), address());
        let before = shop.clone();

        shop.apply_update(&BarberShopDraft {
            name: "New".into(),
            image_url: "https://new.example".into(),
            address: AddressDraft {
                street: "Other".into(),
                district: "Other".into(),
                city: "Other".into(),
                number: "7".into(),
            },
        });

        assert_eq!(shop.name, "New");
        assert_eq!(shop.image_url, "https://new.example");
        assert_eq!(shop.id, before.id);
        assert_eq!(shop.created_at, before.created_at);
        assert_eq!(shop.address, before.address);
    }
}
