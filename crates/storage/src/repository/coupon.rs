use sqlx::{PgConnection, PgPool};

use crate::dto::coupon::CreateCouponRequest;
use crate::error::{Result, StorageError};
use crate::models::Coupon;

const COLUMNS: &str = "coupon_id, codigo, tipo_descuento, usos_maximos, usos_actuales, activo, created_at";

/// Repository for Coupon database operations
pub struct CouponRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CouponRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Coupon>> {
        let coupons = sqlx::query_as::<_, Coupon>(&format!(
            "SELECT {COLUMNS} FROM coupons ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(coupons)
    }

    /// Case-insensitive lookup; codes are stored upper-cased.
    pub async fn find_by_code(&self, codigo: &str) -> Result<Option<Coupon>> {
        let coupon = sqlx::query_as::<_, Coupon>(&format!(
            "SELECT {COLUMNS} FROM coupons WHERE codigo = upper($1)"
        ))
        .bind(codigo)
        .fetch_optional(self.pool)
        .await?;

        Ok(coupon)
    }

    pub async fn create(&self, req: &CreateCouponRequest) -> Result<Coupon> {
        let coupon = sqlx::query_as::<_, Coupon>(&format!(
            "INSERT INTO coupons (codigo, tipo_descuento, usos_maximos)
             VALUES (upper($1), $2, $3)
             RETURNING {COLUMNS}"
        ))
        .bind(&req.codigo)
        .bind(req.tipo_descuento)
        .bind(req.usos_maximos)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("El cupón ya existe".to_string())
            } else {
                err
            }
        })?;

        Ok(coupon)
    }

    /// Conditionally consume one use. Runs inside the caller's transaction so
    /// the increment commits or rolls back together with the registration
    /// insert. Returns the updated coupon, or `None` when the coupon is
    /// missing, inactive or already at its cap, so two concurrent redemptions
    /// of a cap-1 coupon can never both get a row back.
    pub async fn redeem_use(conn: &mut PgConnection, codigo: &str) -> Result<Option<Coupon>> {
        let coupon = sqlx::query_as::<_, Coupon>(&format!(
            "UPDATE coupons
             SET usos_actuales = usos_actuales + 1
             WHERE codigo = upper($1)
               AND activo
               AND (usos_maximos IS NULL OR usos_actuales < usos_maximos)
             RETURNING {COLUMNS}"
        ))
        .bind(codigo)
        .fetch_optional(conn)
        .await?;

        Ok(coupon)
    }
}
