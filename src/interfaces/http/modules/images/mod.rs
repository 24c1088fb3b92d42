//! Images module — upload, list and delete shop pictures

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
