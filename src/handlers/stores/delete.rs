use axum::extract::{Path, State};

use crate::app::AppState;
use crate::auth::CallerIdentity;
use crate::database::models::StoreId;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::authorize;

use super::parse_path;

/// DELETE /stores/:id - remove a store owned by the caller
pub async fn delete(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let store_id: StoreId = parse_path(&id, "Failed to retrieve store id")?;

    let owned = authorize(state.stores.as_ref(), &caller, store_id).await?;
    state.stores.delete(owned.store_id, owned.user_id).await?;

    tracing::info!("User {} deleted store {}", caller.user_id, store_id);
    Ok(ApiResponse::success(()))
}
