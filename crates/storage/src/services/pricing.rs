use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;

use crate::dto::pricing::PriceBreakdown;
use crate::error::{DomainError, DomainResult};
use crate::models::{Category, Coupon, PricingPhase};
use crate::repository::category::CategoryRepository;
use crate::repository::coupon::CouponRepository;
use crate::repository::phase::PhaseRepository;

/// Phase label used when the phase table is empty.
const DEFAULT_PHASE: &str = "ordinaria";

/// Select the phase in effect at `now`: the first (by `orden`) whose cutoff
/// has not passed, or the last phase once every cutoff is behind us. Phases
/// must arrive ordered by `orden`.
pub fn current_phase(phases: &[PricingPhase], now: DateTime<Utc>) -> Option<&PricingPhase> {
    phases
        .iter()
        .find(|p| p.is_open_at(now))
        .or_else(|| phases.last())
}

/// Read-only coupon validation, shared by the validate endpoint and the
/// redemption path.
pub fn validate_coupon(coupon: Option<&Coupon>) -> DomainResult<&Coupon> {
    let coupon = coupon.ok_or(DomainError::CouponNotFound)?;

    if !coupon.activo {
        return Err(DomainError::CouponInactive);
    }
    if coupon.is_exhausted() {
        return Err(DomainError::CouponExhausted);
    }

    Ok(coupon)
}

/// Pure price computation over (now, category table, coupon). No side
/// effects: the usage counter is only touched at redemption time.
///
/// The phase adjustment is resolved once per call; every category in one
/// registration is priced under the same phase. Both the phase-adjusted base
/// and the discount round down to whole COP.
pub fn calculate_price(
    categories: &[Category],
    selected: &[String],
    phases: &[PricingPhase],
    coupon: Option<&Coupon>,
    now: DateTime<Utc>,
) -> DomainResult<PriceBreakdown> {
    if selected.is_empty() {
        return Err(DomainError::EmptySelection);
    }

    let phase = current_phase(phases, now);
    let multiplier = phase.map_or(Decimal::ONE, |p| p.multiplicador);
    let fase_actual = phase.map_or_else(|| DEFAULT_PHASE.to_string(), |p| p.nombre.clone());

    // Selections are a set: a category listed twice is charged once.
    let mut seen: Vec<&str> = Vec::with_capacity(selected.len());
    let mut sum = Decimal::ZERO;
    for nombre in selected {
        if seen.contains(&nombre.as_str()) {
            continue;
        }
        seen.push(nombre);

        let category = categories
            .iter()
            .find(|c| c.nombre == *nombre)
            .ok_or_else(|| DomainError::UnknownCategory(nombre.clone()))?;
        sum += Decimal::from(category.precio) * multiplier;
    }

    let precio_base = floor_cop(sum);

    let descuento = match coupon {
        Some(coupon) => {
            let pct = Decimal::from(coupon.tipo_descuento) / Decimal::from(100);
            floor_cop(Decimal::from(precio_base) * pct)
        }
        None => 0,
    };

    Ok(PriceBreakdown {
        precio_base,
        descuento,
        precio_final: precio_base - descuento,
        fase_actual,
    })
}

fn floor_cop(amount: Decimal) -> i64 {
    amount.floor().to_i64().unwrap_or(0)
}

/// Load the tables and quote a selection, validating the coupon if one was
/// supplied. This is the read side; nothing is consumed here.
pub async fn quote(
    pool: &PgPool,
    categorias: &[String],
    codigo_cupon: Option<&str>,
    now: DateTime<Utc>,
) -> DomainResult<PriceBreakdown> {
    let categories = CategoryRepository::new(pool)
        .find_by_names(categorias)
        .await?;
    let phases = PhaseRepository::new(pool).list_ordered().await?;

    let coupon = match codigo_cupon {
        Some(codigo) => {
            let found = CouponRepository::new(pool).find_by_code(codigo).await?;
            Some(validate_coupon(found.as_ref())?.clone())
        }
        None => None,
    };

    calculate_price(&categories, categorias, &phases, coupon.as_ref(), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn category(nombre: &str, precio: i64) -> Category {
        Category {
            category_id: Uuid::new_v4(),
            nombre: nombre.to_string(),
            precio,
            grupo: None,
            created_at: Utc::now(),
        }
    }

    fn phase(nombre: &str, multiplicador: Decimal, cierre: Option<DateTime<Utc>>, orden: i32) -> PricingPhase {
        PricingPhase {
            phase_id: Uuid::new_v4(),
            nombre: nombre.to_string(),
            multiplicador,
            cierre,
            orden,
        }
    }

    fn coupon(pct: i32) -> Coupon {
        Coupon {
            coupon_id: Uuid::new_v4(),
            codigo: "MITAD".to_string(),
            tipo_descuento: pct,
            usos_maximos: None,
            usos_actuales: 0,
            activo: true,
            created_at: Utc::now(),
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn event_phases() -> Vec<PricingPhase> {
        vec![
            phase("preventa", Decimal::new(85, 2), Some(at(2026, 2, 1)), 1),
            phase("ordinaria", Decimal::ONE, Some(at(2026, 3, 1)), 2),
            phase("extraordinaria", Decimal::new(120, 2), None, 3),
        ]
    }

    #[test]
    fn phase_selection_follows_cutoffs() {
        let phases = event_phases();

        assert_eq!(current_phase(&phases, at(2026, 1, 15)).unwrap().nombre, "preventa");
        assert_eq!(current_phase(&phases, at(2026, 2, 15)).unwrap().nombre, "ordinaria");
        assert_eq!(
            current_phase(&phases, at(2026, 4, 1)).unwrap().nombre,
            "extraordinaria"
        );
        assert!(current_phase(&[], at(2026, 1, 1)).is_none());
    }

    #[test]
    fn no_coupon_final_equals_base() {
        let cats = vec![category("Motocross A", 100_000), category("Motocross B", 150_000)];
        let phases = vec![phase("ordinaria", Decimal::ONE, None, 1)];
        let selected = vec!["Motocross A".to_string(), "Motocross B".to_string()];

        let quote = calculate_price(&cats, &selected, &phases, None, Utc::now()).unwrap();

        assert_eq!(quote.precio_base, 250_000);
        assert_eq!(quote.descuento, 0);
        assert_eq!(quote.precio_final, 250_000);
        assert_eq!(quote.fase_actual, "ordinaria");
    }

    #[test]
    fn late_phase_with_half_coupon() {
        let cats = vec![category("Karts", 100_000)];
        let phases = event_phases();
        let selected = vec!["Karts".to_string()];
        let mitad = coupon(50);

        let quote =
            calculate_price(&cats, &selected, &phases, Some(&mitad), at(2026, 4, 10)).unwrap();

        assert_eq!(quote.precio_base, 120_000);
        assert_eq!(quote.descuento, 60_000);
        assert_eq!(quote.precio_final, 60_000);
        assert_eq!(quote.fase_actual, "extraordinaria");
    }

    #[test]
    fn full_coupon_drives_price_to_zero() {
        let cats = vec![category("Karts", 100_000)];
        let phases = event_phases();
        let full = coupon(100);

        let quote = calculate_price(
            &cats,
            &["Karts".to_string()],
            &phases,
            Some(&full),
            at(2026, 2, 15),
        )
        .unwrap();

        assert_eq!(quote.precio_final, 0);
        assert_eq!(quote.descuento, quote.precio_base);
    }

    #[test]
    fn discount_rounds_down_and_never_goes_negative() {
        let cats = vec![category("Infantil", 33_335)];
        let phases = vec![phase("ordinaria", Decimal::ONE, None, 1)];
        let treinta = coupon(30);

        let quote = calculate_price(
            &cats,
            &["Infantil".to_string()],
            &phases,
            Some(&treinta),
            Utc::now(),
        )
        .unwrap();

        // 30% of 33335 is 10000.5; floor keeps the final amount whole.
        assert_eq!(quote.descuento, 10_000);
        assert_eq!(quote.precio_final, 23_335);
        assert!(quote.precio_final >= 0);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let cats = vec![category("Karts", 100_000)];
        let err = calculate_price(&cats, &[], &[], None, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::EmptySelection));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let cats = vec![category("Karts", 100_000)];
        let err = calculate_price(&cats, &["Trineos".to_string()], &[], None, Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownCategory(name) if name == "Trineos"));
    }

    #[test]
    fn duplicate_selection_charges_once() {
        let cats = vec![category("Karts", 100_000)];
        let phases = vec![phase("ordinaria", Decimal::ONE, None, 1)];
        let selected = vec!["Karts".to_string(), "Karts".to_string()];

        let quote = calculate_price(&cats, &selected, &phases, None, Utc::now()).unwrap();
        assert_eq!(quote.precio_base, 100_000);
    }

    #[test]
    fn preventa_discount_applies_before_cutoff() {
        let cats = vec![category("Karts", 100_000)];
        let phases = event_phases();

        let quote =
            calculate_price(&cats, &["Karts".to_string()], &phases, None, at(2026, 1, 10)).unwrap();

        assert_eq!(quote.precio_base, 85_000);
        assert_eq!(quote.fase_actual, "preventa");
    }

    #[test]
    fn coupon_validation_rules() {
        assert!(matches!(
            validate_coupon(None).unwrap_err(),
            DomainError::CouponNotFound
        ));

        let mut c = coupon(50);
        c.activo = false;
        assert!(matches!(
            validate_coupon(Some(&c)).unwrap_err(),
            DomainError::CouponInactive
        ));

        let mut c = coupon(50);
        c.usos_maximos = Some(3);
        c.usos_actuales = 3;
        assert!(matches!(
            validate_coupon(Some(&c)).unwrap_err(),
            DomainError::CouponExhausted
        ));

        let c = coupon(50);
        assert!(validate_coupon(Some(&c)).is_ok());
    }
}
