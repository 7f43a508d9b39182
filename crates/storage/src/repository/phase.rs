use sqlx::PgPool;

use crate::error::Result;
use crate::models::PricingPhase;

/// Repository for the pricing phase table. The table is the single source of
/// truth for phase selection; nothing else embeds phase dates.
pub struct PhaseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PhaseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_ordered(&self) -> Result<Vec<PricingPhase>> {
        let phases = sqlx::query_as::<_, PricingPhase>(
            "SELECT phase_id, nombre, multiplicador, cierre, orden
             FROM pricing_phases
             ORDER BY orden",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(phases)
    }
}
