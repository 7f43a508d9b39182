pub mod admin;
pub mod category;
pub mod coupon;
pub mod news;
pub mod phase;
pub mod registration;

pub use admin::Admin;
pub use category::Category;
pub use coupon::Coupon;
pub use news::News;
pub use phase::PricingPhase;
pub use registration::{PaymentStatus, Registration};
