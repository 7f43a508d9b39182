use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePreferenceRequest {
    pub registration_id: Uuid,
}

/// The provider redirect URL for collecting the frozen final price.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreferenceResponse {
    pub init_point: String,
}
