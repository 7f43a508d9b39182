use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub qr_secret: String,
    pub mercadopago_access_token: String,
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            jwt_secret: std::env::var("JWT_SECRET")
                .context("Cannot load JWT_SECRET env variable")?,
            qr_secret: std::env::var("QR_SECRET").context("Cannot load QR_SECRET env variable")?,
            mercadopago_access_token: std::env::var("MP_ACCESS_TOKEN").unwrap_or_default(),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }
}
