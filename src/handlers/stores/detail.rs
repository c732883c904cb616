use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::{Store, StoreId};
use crate::middleware::{ApiResponse, ApiResult};

use super::parse_path;

/// GET /stores/:id - show a single store
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Store> {
    let store_id: StoreId = parse_path(&id, "Failed to get store detail")?;
    let store = state.stores.get_by_id(store_id).await?;
    Ok(ApiResponse::success(store))
}
