//! Database entities module

pub mod address;
pub mod barber;
pub mod barber_shop;
pub mod image;

pub use address::Entity as Address;
pub use barber::Entity as Barber;
pub use barber_shop::Entity as BarberShop;
pub use image::Entity as Image;
