//! Address aggregate

pub mod model;
pub mod repository;

pub use model::{Address, AddressDraft};
pub use repository::AddressRepository;
