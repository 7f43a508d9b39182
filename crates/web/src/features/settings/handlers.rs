use axum::{Json, extract::State};
use serde_json::Value;
use storage::repository::settings::SettingsRepository;

use crate::error::WebError;
use crate::middleware::auth::Claims;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Site settings document (theme, hero copy, footer)")
    ),
    tag = "settings"
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Value>, WebError> {
    let settings = SettingsRepository::new(state.db.pool()).get().await?;

    Ok(Json(settings))
}

#[utoipa::path(
    put,
    path = "/api/admin/settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Settings document replaced"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    _claims: Claims,
    Json(data): Json<Value>,
) -> Result<Json<Value>, WebError> {
    let settings = SettingsRepository::new(state.db.pool()).upsert(&data).await?;

    Ok(Json(settings))
}
