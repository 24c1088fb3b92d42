//! Infrastructure layer - external concerns

pub mod database;
pub mod memory;
pub mod object_storage;

pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use memory::InMemoryRepositoryProvider;
pub use object_storage::{InMemoryObjectStorage, LocalObjectStorage};
