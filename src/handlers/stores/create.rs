use axum::extract::State;

use crate::api::JsonBody;
use crate::app::AppState;
use crate::auth::CallerIdentity;
use crate::database::models::Store;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /stores - create a store owned by the caller
///
/// Any `user_id` or `store_id` in the body is ignored: the owner is the
/// verified caller and the id comes from the repository.
pub async fn create(
    State(state): State<AppState>,
    caller: CallerIdentity,
    JsonBody(mut store): JsonBody<Store>,
) -> ApiResult<Store> {
    store.user_id = caller.user_id;
    store.store_id = state.stores.insert(&store).await?;

    tracing::info!("User {} created store {}", caller.user_id, store.store_id);
    Ok(ApiResponse::success(store))
}
