//! Domain layer: aggregates, repository ports and the object storage port

pub mod address;
pub mod barber;
pub mod barber_shop;
pub mod image;
pub mod repositories;
pub mod storage;

pub use address::{Address, AddressDraft, AddressRepository};
pub use barber::{Barber, BarberDraft, BarberRepository};
pub use barber_shop::{BarberShop, BarberShopDraft, BarberShopRepository};
pub use image::{Image, ImagePolicy, ImageRepository, ImageUpload};
pub use repositories::{DomainResult, RepositoryProvider};
pub use storage::ObjectStorage;

pub use crate::shared::errors::{DomainError, StorageError};
