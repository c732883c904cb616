use axum::extract::State;
use serde::Deserialize;

use crate::api::JsonBody;
use crate::app::AppState;
use crate::database::models::Store;
use crate::middleware::{ApiResponse, ApiResult};
use crate::types::{Page, PAGE_SIZE};

/// Body of POST /stores/search. Both fields may be omitted or null.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_string: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
}

/// POST /stores/search - page through stores matching `search_string`
pub async fn search(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> ApiResult<Vec<Store>> {
    let page = Page::new(request.page.unwrap_or_default());
    let search_string = request.search_string.unwrap_or_default();
    let stores = state
        .stores
        .search_by_page(page, PAGE_SIZE, &search_string)
        .await?;

    tracing::debug!(
        "Search '{}' page {} matched {} stores",
        search_string,
        page,
        stores.len()
    );
    Ok(ApiResponse::success(stores))
}
