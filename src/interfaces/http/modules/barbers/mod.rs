//! Barber module — create, update, fetch and list barbers of a shop

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
