pub mod address;
pub mod barber;
pub mod barber_shop;
pub mod image;

pub use address::AddressService;
pub use barber::BarberService;
pub use barber_shop::BarberShopService;
pub use image::ImageService;
