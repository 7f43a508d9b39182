use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "El nombre debe tener entre 1 y 255 caracteres"
    ))]
    pub nombre: String,

    #[validate(range(min = 1, message = "El precio debe ser positivo"))]
    pub precio: i64,

    #[validate(length(max = 255))]
    pub grupo: Option<String>,
}

/// Request payload for updating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub nombre: Option<String>,

    #[validate(range(min = 1))]
    pub precio: Option<i64>,

    #[validate(length(max = 255))]
    pub grupo: Option<String>,
}

/// Public category listing: names, price table and display groups.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categorias: Vec<String>,
    pub precios: BTreeMap<String, i64>,
    pub grupos: BTreeMap<String, Vec<String>>,
}
