use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::WebError;

const TOKEN_LIFETIME_HOURS: i64 = 24;

/// HS256 key pair for the admin session tokens.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: email.to_string(),
            role: "admin".to_string(),
            exp: (Utc::now() + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, WebError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Rejected bearer token: {}", e);
                WebError::Unauthorized("Token inválido o expirado".to_string())
            })
    }
}

/// Verified admin identity. Handlers that take this extractor are only
/// reachable with a valid bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Claims
where
    AuthKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = AuthKeys::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| WebError::Unauthorized("Falta el token de autorización".to_string()))?;

        keys.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_verify() {
        let keys = AuthKeys::new("test-secret");
        let token = keys.issue("admin@coronaclubxp.com").unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "admin@coronaclubxp.com");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn foreign_tokens_are_rejected() {
        let keys = AuthKeys::new("test-secret");
        let other = AuthKeys::new("another-secret");

        let token = other.issue("admin@coronaclubxp.com").unwrap();
        assert!(keys.verify(&token).is_err());
    }
}
