use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    dto::pricing::{CalculatePriceRequest, PriceBreakdown},
    dto::registration::{
        CreateRegistrationRequest, RegistrationCreatedResponse, RegistrationListResponse,
    },
    models::Registration,
    repository::registration::RegistrationRepository,
    services::{pricing, registration},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Claims;
use crate::qr;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/registrations/calculate",
    request_body = CalculatePriceRequest,
    responses(
        (status = 200, description = "Phase-adjusted price breakdown for the selection", body = PriceBreakdown),
        (status = 400, description = "Empty selection, unknown category or unusable coupon"),
        (status = 404, description = "Coupon does not exist")
    ),
    tag = "registrations"
)]
pub async fn calculate_price(
    State(state): State<AppState>,
    Json(req): Json<CalculatePriceRequest>,
) -> Result<Json<PriceBreakdown>, WebError> {
    let breakdown = pricing::quote(
        state.db.pool(),
        &req.categorias,
        req.codigo_cupon.as_deref(),
        Utc::now(),
    )
    .await?;

    Ok(Json(breakdown))
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Registration created with frozen prices and its QR payload", body = RegistrationCreatedResponse),
        (status = 400, description = "Validation error or unusable coupon"),
        (status = 404, description = "Coupon does not exist"),
        (status = 409, description = "Coupon got exhausted by a concurrent submission")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(state): State<AppState>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let created = registration::create_registration(state.db.pool(), &req, Utc::now()).await?;
    let qr_data = qr::issue(created.registration_id, &state.qr_secret);

    Ok((
        StatusCode::CREATED,
        Json(RegistrationCreatedResponse {
            registration: created,
            qr_data,
        }),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/{registration_id}",
    params(("registration_id" = Uuid, Path, description = "Registration id")),
    responses(
        (status = 200, description = "Registration found", body = Registration),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<Uuid>,
) -> Result<Json<Registration>, WebError> {
    let registration = RegistrationRepository::new(state.db.pool())
        .find_by_id(registration_id)
        .await?;

    Ok(Json(registration))
}

#[utoipa::path(
    get,
    path = "/api/registrations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All registrations, newest first", body = RegistrationListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(state): State<AppState>,
    _claims: Claims,
) -> Result<Json<RegistrationListResponse>, WebError> {
    let registrations = RegistrationRepository::new(state.db.pool()).list().await?;
    let total = registrations.len() as i64;

    Ok(Json(RegistrationListResponse {
        registrations,
        total,
    }))
}
