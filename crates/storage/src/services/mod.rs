pub mod checkin;
pub mod pricing;
pub mod registration;
