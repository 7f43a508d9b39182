use sqlx::PgPool;

use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, StorageError};
use crate::models::Category;

const COLUMNS: &str = "category_id, nombre, precio, grupo, created_at";

/// Repository for Category database operations
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories grouped for display.
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM categories ORDER BY grupo NULLS LAST, nombre"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Fetch the categories matching the given names. Callers compare the
    /// result length against the request to detect unknown names.
    pub async fn find_by_names(&self, names: &[String]) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE nombre = ANY($1)"
        ))
        .bind(names)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn find_by_name(&self, nombre: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE nombre = $1"
        ))
        .bind(nombre)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (nombre, precio, grupo)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        ))
        .bind(&req.nombre)
        .bind(req.precio)
        .bind(&req.grupo)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("La categoría ya existe".to_string())
            } else {
                err
            }
        })?;

        Ok(category)
    }

    /// Update a category addressed by its current name. Existing
    /// registrations keep their frozen prices.
    pub async fn update(&self, nombre: &str, req: &UpdateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories
             SET nombre = COALESCE($2, nombre),
                 precio = COALESCE($3, precio),
                 grupo = COALESCE($4, grupo)
             WHERE nombre = $1
             RETURNING {COLUMNS}"
        ))
        .bind(nombre)
        .bind(&req.nombre)
        .bind(req.precio)
        .bind(&req.grupo)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    pub async fn delete(&self, nombre: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE nombre = $1")
            .bind(nombre)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
