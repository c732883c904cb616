use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::models::UserId;

/// JWT claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: UserId,
    pub exp: i64,
    pub iat: i64,
}

/// Identity of the caller, derived from a verified token for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: UserId,
}

impl From<Claims> for CallerIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header must use Bearer token format")]
    InvalidScheme,

    #[error("Empty bearer token")]
    EmptyToken,

    #[error("JWT secret not configured")]
    SecretMissing,

    #[error("Invalid JWT token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Validates the credentials of a request and yields the caller
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, headers: &HeaderMap) -> Result<CallerIdentity, AuthError>;
}

/// HS256 bearer-token verifier
pub struct JwtVerifier {
    key: Option<DecodingKey>,
    validation: Validation,
}

impl JwtVerifier {
    /// An empty secret yields a verifier that rejects every token
    pub fn new(secret: &str) -> Self {
        let key = (!secret.is_empty()).then(|| DecodingKey::from_secret(secret.as_bytes()));
        Self {
            key,
            validation: Validation::default(),
        }
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.validation.leeway = leeway_secs;
        self
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let key = self.key.as_ref().ok_or(AuthError::SecretMissing)?;
        let token_data = decode::<Claims>(token, key, &self.validation)?;
        Ok(token_data.claims)
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, headers: &HeaderMap) -> Result<CallerIdentity, AuthError> {
        let token = extract_bearer_token(headers)?;
        self.decode_claims(token).map(CallerIdentity::from)
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_str = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidScheme)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidScheme)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }
    Ok(token)
}
