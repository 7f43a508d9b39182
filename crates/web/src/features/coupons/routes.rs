use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_coupon, list_coupons, validate_coupon};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/validate", post(validate_coupon))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/", post(create_coupon).get(list_coupons))
}
