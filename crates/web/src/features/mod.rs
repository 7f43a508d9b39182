pub mod attendance;
pub mod auth;
pub mod categories;
pub mod coupons;
pub mod news;
pub mod payments;
pub mod registrations;
pub mod settings;
