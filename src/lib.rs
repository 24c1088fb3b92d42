//! # Barber Shop Service
//!
//! REST backend for a barber shop booking product: shops with their address
//! and pictures, and the barbers working at them.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Aggregates, repository ports and the object storage port
//! - **application**: Use cases orchestrating the ports
//! - **infrastructure**: SeaORM persistence, in-memory stores, object storage backends
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Process lifecycle shared by the CLI

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
