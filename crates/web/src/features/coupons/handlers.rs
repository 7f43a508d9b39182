use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::coupon::{CouponListResponse, CouponValidity, CreateCouponRequest, ValidateCouponRequest},
    models::Coupon,
    repository::coupon::CouponRepository,
    services::pricing,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Claims;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/coupons/validate",
    request_body = ValidateCouponRequest,
    responses(
        (status = 200, description = "Coupon is usable right now", body = CouponValidity),
        (status = 400, description = "Coupon inactive or exhausted"),
        (status = 404, description = "Coupon does not exist")
    ),
    tag = "coupons"
)]
pub async fn validate_coupon(
    State(state): State<AppState>,
    Json(req): Json<ValidateCouponRequest>,
) -> Result<Json<CouponValidity>, WebError> {
    let coupon = CouponRepository::new(state.db.pool())
        .find_by_code(&req.codigo)
        .await?;

    // Read-only: nothing is consumed until a registration is submitted, so a
    // positive answer here can still lose the race at redemption time.
    let coupon = pricing::validate_coupon(coupon.as_ref())?;

    Ok(Json(CouponValidity {
        valido: true,
        tipo_descuento: coupon.tipo_descuento,
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/coupons",
    request_body = CreateCouponRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Coupon created; code stored upper-cased", body = Coupon),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Code already exists")
    ),
    tag = "coupons"
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    _claims: Claims,
    Json(req): Json<CreateCouponRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_discount().map_err(WebError::BadRequest)?;

    let coupon = CouponRepository::new(state.db.pool()).create(&req).await?;

    Ok((StatusCode::CREATED, Json(coupon)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/coupons",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All coupons with their usage counters", body = CouponListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "coupons"
)]
pub async fn list_coupons(
    State(state): State<AppState>,
    _claims: Claims,
) -> Result<Json<CouponListResponse>, WebError> {
    let coupons = CouponRepository::new(state.db.pool()).list().await?;

    Ok(Json(CouponListResponse { coupons }))
}
