use axum::extract::State;

use crate::api::JsonBody;
use crate::app::AppState;
use crate::auth::CallerIdentity;
use crate::database::models::Store;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::authorize;

/// PUT /stores - replace the attributes of a store owned by the caller
///
/// The target is the body's `store_id`. The owner is taken from the record
/// of truth, never from the body.
pub async fn update(
    State(state): State<AppState>,
    caller: CallerIdentity,
    JsonBody(mut store): JsonBody<Store>,
) -> ApiResult<Store> {
    let owned = authorize(state.stores.as_ref(), &caller, store.store_id).await?;
    store.user_id = owned.user_id;

    state.stores.update(&store).await?;

    tracing::info!("User {} updated store {}", caller.user_id, store.store_id);
    Ok(ApiResponse::success(store))
}
