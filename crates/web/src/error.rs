use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::{DomainError, StorageError};
use validator::ValidationErrors;

/// Web layer errors. Every rejection carries a human-readable `detail`
/// message; nothing is retried or swallowed server-side.
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Domain(DomainError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized(String),
    PaymentProvider(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Domain(e) => write!(f, "{}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::PaymentProvider(msg) => write!(f, "Payment provider error: {}", msg),
        }
    }
}

impl WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(e) => storage_status(e),
            Self::Domain(e) => domain_status(e),
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::PaymentProvider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

fn storage_status(error: &StorageError) -> StatusCode {
    match error {
        StorageError::NotFound => StatusCode::NOT_FOUND,
        StorageError::ConstraintViolation(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::CouponNotFound => StatusCode::NOT_FOUND,
        DomainError::CouponExhausted | DomainError::AlreadyCheckedIn => StatusCode::CONFLICT,
        DomainError::UnknownCategory(_)
        | DomainError::EmptySelection
        | DomainError::CouponInactive
        | DomainError::PaymentNotCompleted => StatusCode::BAD_REQUEST,
        DomainError::Storage(e) => storage_status(e),
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(StorageError::NotFound)
            | Self::Domain(DomainError::Storage(StorageError::NotFound)) => {
                json!({ "detail": "Recurso no encontrado" })
            }
            Self::Storage(StorageError::ConstraintViolation(msg))
            | Self::Domain(DomainError::Storage(StorageError::ConstraintViolation(msg))) => {
                json!({ "detail": msg })
            }
            Self::Storage(e) | Self::Domain(DomainError::Storage(e)) => {
                tracing::error!("Storage error: {:?}", e);
                json!({ "detail": "Error interno del servidor" })
            }
            Self::Domain(e) => {
                json!({ "detail": e.to_string() })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "detail": "Datos inválidos",
                    "errors": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({ "detail": msg })
            }
            Self::Unauthorized(msg) => {
                json!({ "detail": msg })
            }
            Self::PaymentProvider(msg) => {
                tracing::error!("Payment provider error: {}", msg);
                json!({ "detail": msg })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<DomainError> for WebError {
    fn from(error: DomainError) -> Self {
        Self::Domain(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
