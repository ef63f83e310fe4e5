//! JWT issuance and verification
//!
//! Tokens carry the authenticated user id and an expiry; the signing secret
//! comes from [`AppConfig`], never from ambient state. Every account and
//! transaction endpoint requires a `Bearer` token via the [`AuthUser`]
//! extractor.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: i64,
    pub iat: i64,
}

/// Issue a signed access token for a user
pub fn sign_jwt(user_id: i64, config: &AppConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        user_id,
        exp: (now + Duration::minutes(config.token_expiry_minutes)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

/// Verify a token, returning the user id it carries.
///
/// Returns None for bad signatures and expired tokens alike.
pub fn verify_jwt(token: &str, config: &AppConfig) -> Option<i64> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.user_id)
    .ok()
}

/// Authenticated user id, extracted from the `Authorization: Bearer` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(ApiError::unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::unauthorized)?;
        let user_id = verify_jwt(token, &state.config).ok_or_else(ApiError::unauthorized)?;
        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify_round_trip() {
        let config = AppConfig::default();
        let token = sign_jwt(42, &config).unwrap();
        assert_eq!(verify_jwt(&token, &config), Some(42));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = AppConfig::default();
        let token = sign_jwt(42, &config).unwrap();

        let other = AppConfig {
            jwt_secret: "another-secret".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(verify_jwt(&token, &other), None);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative lifetime puts exp well past the default validation leeway
        let config = AppConfig {
            token_expiry_minutes: -5,
            ..AppConfig::default()
        };
        let token = sign_jwt(42, &config).unwrap();
        assert_eq!(verify_jwt(&token, &config), None);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let config = AppConfig::default();
        assert_eq!(verify_jwt("not-a-token", &config), None);
    }
}
