use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::news::{CreateNewsRequest, NewsListResponse},
    models::News,
    repository::news::NewsRepository,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Claims;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "Published news, newest first", body = NewsListResponse)
    ),
    tag = "news"
)]
pub async fn list_news(State(state): State<AppState>) -> Result<Json<NewsListResponse>, WebError> {
    let news = NewsRepository::new(state.db.pool()).list().await?;

    Ok(Json(NewsListResponse { news }))
}

#[utoipa::path(
    post,
    path = "/api/admin/news",
    request_body = CreateNewsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "News item published", body = News),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "news"
)]
pub async fn create_news(
    State(state): State<AppState>,
    _claims: Claims,
    Json(req): Json<CreateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let news = NewsRepository::new(state.db.pool()).create(&req).await?;

    Ok((StatusCode::CREATED, Json(news)).into_response())
}
