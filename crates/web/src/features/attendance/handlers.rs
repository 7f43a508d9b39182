use axum::{Json, extract::State};
use chrono::Utc;
use storage::{
    dto::checkin::{AttendanceStats, CheckInRequest, QrScanRequest, ScanResponse},
    models::Registration,
    repository::registration::RegistrationRepository,
    services::checkin,
};

use crate::error::WebError;
use crate::middleware::auth::Claims;
use crate::qr;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/qr/scan",
    request_body = QrScanRequest,
    responses(
        (status = 200, description = "Resolved registration and whether it may check in", body = ScanResponse),
        (status = 400, description = "Malformed or tampered QR payload"),
        (status = 404, description = "Unknown registration")
    ),
    tag = "attendance"
)]
pub async fn scan_qr(
    State(state): State<AppState>,
    Json(req): Json<QrScanRequest>,
) -> Result<Json<ScanResponse>, WebError> {
    let registration_id = qr::resolve(&req.qr_data, &state.qr_secret)
        .ok_or_else(|| WebError::BadRequest("QR inválido".to_string()))?;

    let registration = RegistrationRepository::new(state.db.pool())
        .find_by_id(registration_id)
        .await?;
    let can_check_in = checkin::can_check_in(&registration);

    Ok(Json(ScanResponse {
        registration,
        can_check_in,
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/check-in",
    request_body = CheckInRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Check-in recorded", body = Registration),
        (status = 400, description = "Payment not completed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Already checked in")
    ),
    tag = "attendance"
)]
pub async fn check_in(
    State(state): State<AppState>,
    _claims: Claims,
    Json(req): Json<CheckInRequest>,
) -> Result<Json<Registration>, WebError> {
    let registration =
        checkin::check_in(state.db.pool(), req.registration_id, Utc::now()).await?;

    Ok(Json(registration))
}

#[utoipa::path(
    get,
    path = "/api/admin/attendance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Attendance counters and checked-in list", body = AttendanceStats),
        (status = 401, description = "Unauthorized")
    ),
    tag = "attendance"
)]
pub async fn attendance_stats(
    State(state): State<AppState>,
    _claims: Claims,
) -> Result<Json<AttendanceStats>, WebError> {
    let stats = checkin::attendance(state.db.pool()).await?;

    Ok(Json(stats))
}
