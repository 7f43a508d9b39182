use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A time-bounded pricing tier. Phases are ordered by `orden`; the current
/// phase at any instant is the first whose `cierre` has not passed yet, and
/// the last phase (open-ended, `cierre` NULL) applies once every cutoff is
/// behind us.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PricingPhase {
    pub phase_id: Uuid,
    pub nombre: String,
    pub multiplicador: Decimal,
    pub cierre: Option<DateTime<Utc>>,
    pub orden: i32,
}

impl PricingPhase {
    /// Whether this phase is still open at `now`.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        match self.cierre {
            Some(cierre) => now < cierre,
            None => true,
        }
    }
}
