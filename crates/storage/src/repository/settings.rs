use serde_json::{Value, json};
use sqlx::PgPool;

use crate::error::Result;

/// Single-document site settings. The core never reads this; it is an
/// externally-owned configuration record surfaced through the API.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<Value> {
        let row: Option<(Value,)> =
            sqlx::query_as("SELECT data FROM site_settings WHERE singleton")
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(|(data,)| data).unwrap_or_else(default_settings))
    }

    pub async fn upsert(&self, data: &Value) -> Result<Value> {
        let (data,): (Value,) = sqlx::query_as(
            "INSERT INTO site_settings (singleton, data, updated_at)
             VALUES (TRUE, $1, now())
             ON CONFLICT (singleton) DO UPDATE SET data = $1, updated_at = now()
             RETURNING data",
        )
        .bind(data)
        .fetch_one(self.pool)
        .await?;

        Ok(data)
    }
}

/// Defaults served before an admin saves anything.
pub fn default_settings() -> Value {
    json!({
        "primary_color": "#FF0000",
        "secondary_color": "#00CED1",
        "accent_color": "#E6007E",
        "background_color": "#050505",
        "event_start_date": "20 de Febrero 2026",
        "event_end_date": "22 de Febrero 2026",
        "event_location": "Corona Club XP, Popayán",
        "hero_title": "CAMPEONATO INTERLIGAS",
        "hero_subtitle": "SUPER GP",
        "hero_description": "Vive la emoción del motociclismo extremo",
        "footer_text": "© 2026 Corona Club XP. Todos los derechos reservados.",
        "footer_email": "contacto@coronaclubxp.com",
        "footer_phone": "+57 300 123 4567",
        "footer_address": "Avenida Panamericana, Km 9 El Cofre",
        "instagram_url": "https://instagram.com/coronaclubxp",
        "facebook_url": "https://facebook.com/coronaclubxp",
        "nav_links": [
            {"label": "Inicio", "path": "/"},
            {"label": "Categorías", "path": "/categorias"},
            {"label": "Calendario", "path": "/calendario"},
            {"label": "Inscripciones", "path": "/inscripcion"},
            {"label": "Galería", "path": "/galeria"},
            {"label": "Noticias", "path": "/noticias"}
        ]
    })
}
