use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::Store;
use crate::middleware::{ApiResponse, ApiResult};
use crate::types::{Page, PAGE_SIZE};

use super::parse_path;

/// GET /stores/page/:page - list stores, ten per page
pub async fn list(State(state): State<AppState>, Path(page): Path<String>) -> ApiResult<Vec<Store>> {
    let page = Page::new(parse_path(&page, "Failed to get page value")?);
    let stores = state.stores.list_by_page(page, PAGE_SIZE).await?;

    tracing::debug!("Listed {} stores on page {}", stores.len(), page);
    Ok(ApiResponse::success(stores))
}
