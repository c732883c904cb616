use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::ApiError;

/// Why a request body could not be turned into a typed value
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body stream failed or exceeded the size limit
    #[error("Fail to read request body")]
    Unreadable(#[source] axum::Error),

    /// The body was read but is not the expected JSON structure
    #[error("Fail to parse json format")]
    Malformed(#[source] serde_json::Error),
}

/// Decode a complete JSON document into `T`
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(DecodeError::Malformed)
}

/// JSON request body extractor.
///
/// Unlike `axum::Json` it does not require a JSON content type, and its
/// rejections use the API error envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| DecodeError::Unreadable(axum::Error::new(rejection)))?;

        Ok(JsonBody(decode_json(&bytes)?))
    }
}
