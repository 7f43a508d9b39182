use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for a price quote
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculatePriceRequest {
    pub categorias: Vec<String>,
    pub codigo_cupon: Option<String>,
}

/// The computed breakdown for a selection of categories. `fase_actual` is
/// the label of the pricing phase that applied; it is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceBreakdown {
    pub precio_base: i64,
    pub descuento: i64,
    pub precio_final: i64,
    pub fase_actual: String,
}
