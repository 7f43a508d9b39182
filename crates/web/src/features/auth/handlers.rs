use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    dto::auth::{AdminLoginRequest, AdminRegisterRequest, TokenResponse},
    repository::admin::AdminRepository,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Bearer token for the back office", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<TokenResponse>, WebError> {
    let admin = AdminRepository::new(state.db.pool())
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| WebError::Unauthorized("Credenciales inválidas".to_string()))?;

    let valid = bcrypt::verify(&req.password, &admin.password_hash)
        .map_err(|_| WebError::Unauthorized("Credenciales inválidas".to_string()))?;
    if !valid {
        tracing::warn!(email = %req.email, "Failed admin login");
        return Err(WebError::Unauthorized("Credenciales inválidas".to_string()));
    }

    let access_token = state
        .auth
        .issue(&admin.email)
        .map_err(|e| WebError::Unauthorized(e.to_string()))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/register",
    request_body = AdminRegisterRequest,
    responses(
        (status = 201, description = "Admin account created"),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<AdminRegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    AdminRepository::new(state.db.pool())
        .create(&req.email, &password_hash)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Admin creado exitosamente" })),
    )
        .into_response())
}
