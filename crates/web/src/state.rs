use std::sync::Arc;

use axum::extract::FromRef;
use storage::Database;

use crate::middleware::auth::AuthKeys;
use crate::payments::PaymentProvider;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthKeys,
    pub payments: Arc<dyn PaymentProvider>,
    pub qr_secret: Arc<str>,
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
