pub mod barber_shops;
pub mod barbers;
pub mod health;
pub mod images;
pub mod metrics;
pub mod request_id;
