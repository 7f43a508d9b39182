use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{attendance_stats, check_in, scan_qr};
use crate::state::AppState;

pub fn scan_routes() -> Router<AppState> {
    Router::new().route("/scan", post(scan_qr))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/check-in", post(check_in))
        .route("/attendance", get(attendance_stats))
}
