use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::category::{CategoriesResponse, CreateCategoryRequest, UpdateCategoryRequest},
    models::Category,
    repository::category::CategoryRepository,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Claims;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Category names, price table and display groups", body = CategoriesResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, WebError> {
    let categories = CategoryRepository::new(state.db.pool()).list().await?;

    let mut precios = BTreeMap::new();
    let mut grupos: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut categorias = Vec::with_capacity(categories.len());

    for category in categories {
        categorias.push(category.nombre.clone());
        precios.insert(category.nombre.clone(), category.precio);
        if let Some(grupo) = category.grupo {
            grupos.entry(grupo).or_default().push(category.nombre);
        }
    }

    Ok(Json(CategoriesResponse {
        categorias,
        precios,
        grupos,
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    _claims: Claims,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = CategoryRepository::new(state.db.pool()).create(&req).await?;

    Ok((StatusCode::CREATED, Json(category)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/categories/{nombre}",
    params(("nombre" = String, Path, description = "Current category name")),
    request_body = UpdateCategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category updated; existing registrations keep their frozen prices", body = Category),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    _claims: Claims,
    Path(nombre): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, WebError> {
    req.validate()?;

    let category = CategoryRepository::new(state.db.pool())
        .update(&nombre, &req)
        .await?;

    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{nombre}",
    params(("nombre" = String, Path, description = "Category name")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    _claims: Claims,
    Path(nombre): Path<String>,
) -> Result<Response, WebError> {
    CategoryRepository::new(state.db.pool()).delete(&nombre).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
