use axum::{
    Router,
    routing::{get, post, put},
};

use super::handlers::{create_category, delete_category, list_categories, update_category};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category))
        .route("/:nombre", put(update_category).delete(delete_category))
}
