pub mod admin;
pub mod category;
pub mod coupon;
pub mod news;
pub mod phase;
pub mod registration;
pub mod settings;
