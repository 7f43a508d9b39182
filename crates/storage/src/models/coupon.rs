use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A percentage discount code. Codes are stored upper-cased and matched
/// case-insensitively. `usos_actuales` never exceeds `usos_maximos` when a
/// cap is set; the increment happens through a conditional update at
/// registration time, never during validation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Coupon {
    pub coupon_id: Uuid,
    pub codigo: String,
    /// Discount percentage: 30, 50 or 100.
    pub tipo_descuento: i32,
    pub usos_maximos: Option<i32>,
    pub usos_actuales: i32,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

impl Coupon {
    /// True when a usage cap is set and already reached.
    pub fn is_exhausted(&self) -> bool {
        self.usos_maximos
            .is_some_and(|cap| self.usos_actuales >= cap)
    }
}
