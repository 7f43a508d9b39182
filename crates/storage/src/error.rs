use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }
}

/// Business rule failures from the pricing, redemption and check-in flows.
/// Messages are the user-facing `detail` strings of the public API.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Categoría desconocida: {0}")]
    UnknownCategory(String),

    #[error("Debe seleccionar al menos una categoría")]
    EmptySelection,

    #[error("Cupón no válido")]
    CouponNotFound,

    #[error("Cupón inactivo")]
    CouponInactive,

    #[error("Cupón agotado")]
    CouponExhausted,

    #[error("Ya hizo check-in")]
    AlreadyCheckedIn,

    #[error("Pago pendiente: no puede hacer check-in")]
    PaymentNotCompleted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<sqlx::Error> for DomainError {
    fn from(e: sqlx::Error) -> Self {
        DomainError::Storage(StorageError::Database(e))
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
