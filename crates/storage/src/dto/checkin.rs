use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Registration;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QrScanRequest {
    pub qr_data: String,
}

/// Scan result: the resolved registration and whether the gate may record a
/// check-in for it right now.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScanResponse {
    pub registration: Registration,
    pub can_check_in: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInRequest {
    pub registration_id: Uuid,
}

/// Attendance overview for the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceStats {
    pub total: i64,
    pub checked_in: i64,
    pub checked_in_list: Vec<Registration>,
}
