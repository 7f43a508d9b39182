use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::News;

/// Request payload for publishing a news item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 255, message = "El título es obligatorio"))]
    pub titulo: String,

    #[validate(length(min = 1, message = "El contenido es obligatorio"))]
    pub contenido: String,

    #[validate(url(message = "URL de imagen inválida"))]
    pub imagen_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsListResponse {
    pub news: Vec<News>,
}
