//! HTTP REST API interfaces
//!
//! - `common`: error envelope, extractors, validation and paging helpers
//! - `modules`: per-resource DTOs and handlers
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, ApiState, RouterOptions};
