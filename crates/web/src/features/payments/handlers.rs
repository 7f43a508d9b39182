use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    dto::payment::{CreatePreferenceRequest, PreferenceResponse},
    models::{PaymentStatus, Registration},
    repository::registration::RegistrationRepository,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::payments::ProviderPaymentStatus;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/payments/create-preference",
    request_body = CreatePreferenceRequest,
    responses(
        (status = 200, description = "Checkout session for exactly the frozen final price", body = PreferenceResponse),
        (status = 400, description = "Registration needs no payment"),
        (status = 404, description = "Registration not found"),
        (status = 502, description = "Payment provider failure; registration stays pendiente")
    ),
    tag = "payments"
)]
pub async fn create_preference(
    State(state): State<AppState>,
    Json(req): Json<CreatePreferenceRequest>,
) -> Result<Json<PreferenceResponse>, WebError> {
    let registration = RegistrationRepository::new(state.db.pool())
        .find_by_id(req.registration_id)
        .await?;

    if registration.estado_pago == PaymentStatus::Completado || registration.precio_final == 0 {
        return Err(WebError::BadRequest(
            "La inscripción no requiere pago".to_string(),
        ));
    }

    let preference = state
        .payments
        .create_preference(
            registration.registration_id,
            registration.precio_final,
            &registration.correo,
        )
        .await
        .map_err(|e| WebError::PaymentProvider(e.to_string()))?;

    Ok(Json(PreferenceResponse {
        init_point: preference.init_point,
    }))
}

#[utoipa::path(
    post,
    path = "/api/payments/verify/{registration_id}",
    params(("registration_id" = Uuid, Path, description = "Registration id")),
    responses(
        (status = 200, description = "Registration with its reconciled payment status", body = Registration),
        (status = 404, description = "Registration not found"),
        (status = 502, description = "Payment provider failure; registration stays pendiente")
    ),
    tag = "payments"
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    Path(registration_id): Path<Uuid>,
) -> Result<Json<Registration>, WebError> {
    let repo = RegistrationRepository::new(state.db.pool());
    let registration = repo.find_by_id(registration_id).await?;

    // Completed payments are final; a verify call is a no-op for them.
    if registration.estado_pago == PaymentStatus::Completado {
        return Ok(Json(registration));
    }

    let provider_status = state
        .payments
        .payment_status(registration_id)
        .await
        .map_err(|e| WebError::PaymentProvider(e.to_string()))?;

    let registration = match provider_status {
        ProviderPaymentStatus::Approved => {
            tracing::info!(registration_id = %registration_id, "Payment confirmed");
            repo.set_payment_status(registration_id, PaymentStatus::Completado)
                .await?
        }
        ProviderPaymentStatus::Rejected => {
            repo.set_payment_status(registration_id, PaymentStatus::Fallido)
                .await?
        }
        ProviderPaymentStatus::Pending => registration,
    };

    Ok(Json(registration))
}
