// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::api::decode::DecodeError;
use crate::auth::AuthError;
use crate::database::repository::RepositoryError;
use crate::services::ownership::AuthzError;

pub const LOGIN_REQUIRED: &str = "Please login";
pub const NOT_OWNER: &str = "You are not authorized to modify this store";

/// HTTP API error. Every variant carries the single message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 400 Bad Request
    AuthenticationRequired(String),
    BadRequest(String),
    NotAuthorized(String),
    Repository(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AuthenticationRequired(_)
            | ApiError::BadRequest(_)
            | ApiError::NotAuthorized(_)
            | ApiError::Repository(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::AuthenticationRequired(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotAuthorized(msg)
            | ApiError::Repository(msg)
            | ApiError::InternalServerError(msg) => msg,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "error": self.message() })
    }
}

impl ApiError {
    pub fn authentication_required() -> Self {
        ApiError::AuthenticationRequired(LOGIN_REQUIRED.to_string())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_authorized() -> Self {
        ApiError::NotAuthorized(NOT_OWNER.to_string())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::debug!("Authentication failed: {}", err);
        ApiError::authentication_required()
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        tracing::debug!("Request body rejected: {:?}", err);
        ApiError::bad_request(err.to_string())
    }
}

impl From<AuthzError> for ApiError {
    fn from(err: AuthzError) -> Self {
        match &err {
            AuthzError::NotOwner { .. } => tracing::warn!("Ownership check denied: {}", err),
            AuthzError::Lookup { .. } => tracing::warn!("Ownership check failed closed: {}", err),
        }
        ApiError::not_authorized()
    }
}

// Repository text is passed through to the client unchanged
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match &err {
            RepositoryError::NotFound(_) => tracing::debug!("Repository: {}", err),
            _ => tracing::error!("Repository error: {}", err),
        }
        ApiError::Repository(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
