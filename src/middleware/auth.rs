use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::app::AppState;
use crate::auth::CallerIdentity;
use crate::error::ApiError;

/// Bearer-token authentication as an extractor.
///
/// Handlers that take a `CallerIdentity` argument reject unauthenticated
/// requests before any body is read; public handlers simply omit it.
#[async_trait]
impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let caller = state.verifier.verify(&parts.headers).map_err(|err| {
            tracing::warn!("Rejected {} {}: {}", parts.method, parts.uri.path(), err);
            ApiError::from(err)
        })?;

        tracing::debug!("Authenticated user {}", caller.user_id);
        Ok(caller)
    }
}
