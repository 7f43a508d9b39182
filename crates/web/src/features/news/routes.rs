use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_news, list_news};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(list_news))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/", post(create_news))
}
