use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{get_settings, update_settings};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/", put(update_settings))
}
