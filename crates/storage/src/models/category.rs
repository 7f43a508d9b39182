use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A competition class riders can register for. Prices are COP amounts
/// without minor units.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: Uuid,
    pub nombre: String,
    pub precio: i64,
    pub grupo: Option<String>,
    pub created_at: DateTime<Utc>,
}
