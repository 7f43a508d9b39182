pub mod auth;
pub mod category;
pub mod checkin;
pub mod coupon;
pub mod news;
pub mod payment;
pub mod pricing;
pub mod registration;
