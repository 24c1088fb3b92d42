//! Barber shop images and the per-shop image policy

pub mod model;
pub mod repository;

pub use model::{Image, ImagePolicy, ImageUpload};
pub use repository::ImageRepository;
