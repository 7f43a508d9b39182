use axum::{Router, routing::post};

use super::handlers::{create_preference, verify_payment};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create-preference", post(create_preference))
        .route("/verify/:registration_id", post(verify_payment))
}
