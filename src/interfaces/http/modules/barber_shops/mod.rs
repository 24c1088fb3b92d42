//! Barber shop module — create, update, fetch and list shops

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
