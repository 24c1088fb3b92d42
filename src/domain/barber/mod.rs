//! Barber aggregate

pub mod model;
pub mod repository;

pub use model::{Barber, BarberDraft};
pub use repository::BarberRepository;
