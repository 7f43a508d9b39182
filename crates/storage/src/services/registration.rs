use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::registration::CreateRegistrationRequest;
use crate::error::{DomainError, DomainResult};
use crate::models::{PaymentStatus, Registration};
use crate::repository::coupon::CouponRepository;
use crate::repository::registration::RegistrationRepository;
use crate::services::pricing;

/// A fully discounted registration needs no payment session; it is paid the
/// moment it exists.
pub fn initial_payment_status(precio_final: i64) -> PaymentStatus {
    if precio_final == 0 {
        PaymentStatus::Completado
    } else {
        PaymentStatus::Pendiente
    }
}

/// Create a registration with its price frozen at `now`, consuming one
/// coupon use when a code was supplied.
///
/// The coupon increment and the registration insert run in one transaction:
/// the conditional update either consumes a use and the row is written, or
/// zero rows match and everything rolls back. A coupon that passed
/// validation but got exhausted in the meantime fails here with
/// `CouponExhausted`; that is the race losing, not a bug.
pub async fn create_registration(
    pool: &PgPool,
    req: &CreateRegistrationRequest,
    now: DateTime<Utc>,
) -> DomainResult<Registration> {
    let quote = pricing::quote(pool, &req.categorias, req.codigo_cupon.as_deref(), now).await?;

    let mut tx = pool.begin().await?;

    let codigo_cupon = match req.codigo_cupon.as_deref() {
        Some(codigo) => {
            let redeemed = CouponRepository::redeem_use(&mut *tx, codigo).await?;
            match redeemed {
                Some(coupon) => Some(coupon.codigo),
                None => {
                    // The conditional update matched nothing; re-read outside
                    // the failed path to report why.
                    drop(tx);
                    let coupon = CouponRepository::new(pool).find_by_code(codigo).await?;
                    pricing::validate_coupon(coupon.as_ref())?;
                    return Err(DomainError::CouponExhausted);
                }
            }
        }
        None => None,
    };

    let registration = Registration {
        registration_id: Uuid::new_v4(),
        nombre: req.nombre.clone(),
        apellido: req.apellido.clone(),
        cedula: req.cedula.clone(),
        numero_competicion: req.numero_competicion.clone(),
        celular: req.celular.clone(),
        correo: req.correo.clone(),
        categorias: req.categorias.clone(),
        precio_base: quote.precio_base,
        descuento: quote.descuento,
        precio_final: quote.precio_final,
        codigo_cupon,
        estado_pago: initial_payment_status(quote.precio_final),
        created_at: now,
        check_in_time: None,
    };

    let created = RegistrationRepository::insert(&mut *tx, &registration).await?;
    tx.commit().await.map_err(DomainError::from)?;

    tracing::info!(
        registration_id = %created.registration_id,
        precio_final = created.precio_final,
        cupon = created.codigo_cupon.as_deref().unwrap_or("-"),
        "Registration created"
    );

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_final_price_is_paid_at_creation() {
        assert_eq!(initial_payment_status(0), PaymentStatus::Completado);
    }

    #[test]
    fn positive_final_price_starts_pending() {
        assert_eq!(initial_payment_status(60_000), PaymentStatus::Pendiente);
        assert_eq!(initial_payment_status(1), PaymentStatus::Pendiente);
    }
}
