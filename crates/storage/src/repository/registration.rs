use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{PaymentStatus, Registration};

const COLUMNS: &str = "registration_id, nombre, apellido, cedula, numero_competicion, celular, \
                       correo, categorias, precio_base, descuento, precio_final, codigo_cupon, \
                       estado_pago, created_at, check_in_time";

/// Repository for Registration database operations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM registrations ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM registrations WHERE registration_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Insert a fully-built registration row. Runs on the caller's
    /// transaction so it commits atomically with the coupon increment.
    pub async fn insert(conn: &mut PgConnection, reg: &Registration) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "INSERT INTO registrations (
                 registration_id, nombre, apellido, cedula, numero_competicion, celular,
                 correo, categorias, precio_base, descuento, precio_final, codigo_cupon,
                 estado_pago, created_at
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        ))
        .bind(reg.registration_id)
        .bind(&reg.nombre)
        .bind(&reg.apellido)
        .bind(&reg.cedula)
        .bind(&reg.numero_competicion)
        .bind(&reg.celular)
        .bind(&reg.correo)
        .bind(&reg.categorias)
        .bind(reg.precio_base)
        .bind(reg.descuento)
        .bind(reg.precio_final)
        .bind(&reg.codigo_cupon)
        .bind(reg.estado_pago)
        .bind(reg.created_at)
        .fetch_one(conn)
        .await?;

        Ok(registration)
    }

    pub async fn set_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "UPDATE registrations SET estado_pago = $2
             WHERE registration_id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Compare-and-set check-in: only a paid, not-yet-checked-in row is
    /// stamped. Concurrent scans race on this single statement, so at most
    /// one caller gets a row back.
    pub async fn try_check_in(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(&format!(
            "UPDATE registrations SET check_in_time = $2
             WHERE registration_id = $1
               AND check_in_time IS NULL
               AND estado_pago = 'completado'
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(now)
        .fetch_optional(self.pool)
        .await?;

        Ok(registration)
    }

    pub async fn count(&self) -> Result<i64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM registrations")
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }

    pub async fn checked_in(&self) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM registrations
             WHERE check_in_time IS NOT NULL
             ORDER BY check_in_time DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }
}
