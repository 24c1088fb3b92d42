//! Barber shop aggregate
//!
//! A shop together with its address and image references.

pub mod model;
pub mod repository;

pub use model::{BarberShop, BarberShopDraft};
pub use repository::BarberShopRepository;
