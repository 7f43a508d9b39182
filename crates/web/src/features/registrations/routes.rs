use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{
    calculate_price, create_registration, get_registration, list_registrations,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_registration).get(list_registrations))
        .route("/calculate", post(calculate_price))
        .route("/:registration_id", get(get_registration))
}
