use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::checkin::AttendanceStats;
use crate::error::{DomainError, DomainResult};
use crate::models::{PaymentStatus, Registration};
use crate::repository::registration::RegistrationRepository;

/// A registration may check in iff payment is complete and no check-in has
/// been recorded yet.
pub fn can_check_in(registration: &Registration) -> bool {
    registration.estado_pago == PaymentStatus::Completado
        && registration.check_in_time.is_none()
}

/// Decide why a registration cannot check in. Incomplete payment wins over
/// an existing check-in stamp.
pub fn check_in_guard(registration: &Registration) -> DomainResult<()> {
    if registration.estado_pago != PaymentStatus::Completado {
        return Err(DomainError::PaymentNotCompleted);
    }
    if registration.check_in_time.is_some() {
        return Err(DomainError::AlreadyCheckedIn);
    }
    Ok(())
}

/// Record the one-time check-in. The stamp is written through a
/// compare-and-set update, so of N concurrent scans of the same registration
/// exactly one succeeds; the rest land here on the zero-row path and get the
/// precise rejection from a fresh read.
pub async fn check_in(
    pool: &PgPool,
    registration_id: Uuid,
    now: DateTime<Utc>,
) -> DomainResult<Registration> {
    let repo = RegistrationRepository::new(pool);

    if let Some(registration) = repo.try_check_in(registration_id, now).await? {
        tracing::info!(registration_id = %registration_id, "Check-in recorded");
        return Ok(registration);
    }

    let registration = repo.find_by_id(registration_id).await?;
    check_in_guard(&registration)?;

    // The guard passed on the fresh read, meaning payment completed between
    // the failed update and now. One more attempt settles it.
    repo.try_check_in(registration_id, now)
        .await?
        .ok_or(DomainError::AlreadyCheckedIn)
}

/// Attendance overview for the admin panel.
pub async fn attendance(pool: &PgPool) -> DomainResult<AttendanceStats> {
    let repo = RegistrationRepository::new(pool);

    let total = repo.count().await?;
    let checked_in_list = repo.checked_in().await?;

    Ok(AttendanceStats {
        total,
        checked_in: checked_in_list.len() as i64,
        checked_in_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(estado_pago: PaymentStatus, checked_in: bool) -> Registration {
        Registration {
            registration_id: Uuid::new_v4(),
            nombre: "Ana".to_string(),
            apellido: "Rojas".to_string(),
            cedula: "10203040".to_string(),
            numero_competicion: "42".to_string(),
            celular: "3001234567".to_string(),
            correo: "ana@example.com".to_string(),
            categorias: vec!["Karts".to_string()],
            precio_base: 100_000,
            descuento: 0,
            precio_final: 100_000,
            codigo_cupon: None,
            estado_pago,
            created_at: Utc::now(),
            check_in_time: checked_in.then(Utc::now),
        }
    }

    #[test]
    fn only_paid_unchecked_registrations_may_check_in() {
        assert!(can_check_in(&registration(PaymentStatus::Completado, false)));
        assert!(!can_check_in(&registration(PaymentStatus::Completado, true)));
        assert!(!can_check_in(&registration(PaymentStatus::Pendiente, false)));
        assert!(!can_check_in(&registration(PaymentStatus::Fallido, false)));
    }

    #[test]
    fn pending_payment_rejects_even_when_never_checked_in() {
        let err = check_in_guard(&registration(PaymentStatus::Pendiente, false)).unwrap_err();
        assert!(matches!(err, DomainError::PaymentNotCompleted));
    }

    #[test]
    fn payment_check_wins_over_existing_stamp() {
        let err = check_in_guard(&registration(PaymentStatus::Pendiente, true)).unwrap_err();
        assert!(matches!(err, DomainError::PaymentNotCompleted));
    }

    #[test]
    fn second_check_in_is_rejected() {
        let err = check_in_guard(&registration(PaymentStatus::Completado, true)).unwrap_err();
        assert!(matches!(err, DomainError::AlreadyCheckedIn));
    }

    #[test]
    fn eligible_registration_passes_guard() {
        assert!(check_in_guard(&registration(PaymentStatus::Completado, false)).is_ok());
    }
}
