//! External payment provider. The core only hands over the frozen final
//! amount and the registration id as the provider's client reference; the
//! payment protocol itself stays on the provider's side.

pub mod mercadopago;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use mercadopago::MercadoPago;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Error de comunicación con la pasarela de pagos: {0}")]
    Http(#[from] reqwest::Error),

    #[error("La pasarela de pagos rechazó la solicitud: {0}")]
    Provider(String),
}

/// A created checkout session: where to redirect the payer.
#[derive(Debug, Clone)]
pub struct Preference {
    pub init_point: String,
}

/// What the provider reports for a registration's payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderPaymentStatus {
    Approved,
    Rejected,
    Pending,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Open a checkout session for exactly `amount` COP, with the
    /// registration id as external reference.
    async fn create_preference(
        &self,
        registration_id: Uuid,
        amount: i64,
        payer_email: &str,
    ) -> Result<Preference, PaymentError>;

    /// Poll the provider for the latest payment state of a registration.
    async fn payment_status(
        &self,
        registration_id: Uuid,
    ) -> Result<ProviderPaymentStatus, PaymentError>;
}
