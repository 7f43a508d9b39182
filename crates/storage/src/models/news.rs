use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct News {
    pub news_id: Uuid,
    pub titulo: String,
    pub contenido: String,
    pub imagen_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
