use sqlx::PgPool;

use crate::dto::news::CreateNewsRequest;
use crate::error::Result;
use crate::models::News;

const COLUMNS: &str = "news_id, titulo, contenido, imagen_url, created_at";

pub struct NewsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NewsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<News>> {
        let news = sqlx::query_as::<_, News>(&format!(
            "SELECT {COLUMNS} FROM news ORDER BY created_at DESC LIMIT 100"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(news)
    }

    pub async fn create(&self, req: &CreateNewsRequest) -> Result<News> {
        let news = sqlx::query_as::<_, News>(&format!(
            "INSERT INTO news (titulo, contenido, imagen_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        ))
        .bind(&req.titulo)
        .bind(&req.contenido)
        .bind(&req.imagen_url)
        .fetch_one(self.pool)
        .await?;

        Ok(news)
    }
}
