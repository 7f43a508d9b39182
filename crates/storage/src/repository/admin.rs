use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Admin;

const COLUMNS: &str = "admin_id, email, password_hash, created_at";

pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(&format!(
            "SELECT {COLUMNS} FROM admins WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }

    pub async fn create(&self, email: &str, password_hash: &str) -> Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(&format!(
            "INSERT INTO admins (email, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        ))
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("Admin ya existe".to_string())
            } else {
                err
            }
        })?;

        Ok(admin)
    }
}
