use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::{Store, StoreId, UserId};
use crate::types::Page;

/// Errors reported by a store repository. The display text is what callers see.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store {0} not found")]
    NotFound(StoreId),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence boundary for stores.
///
/// Mutating calls are conditional on ownership: `delete` and `update` only
/// touch a record that is still held by the given owner, and report
/// `NotFound` otherwise. Ordering of pages is ascending `store_id`.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Persist a new store, returning its assigned id. `store.store_id` is ignored.
    async fn insert(&self, store: &Store) -> Result<StoreId, RepositoryError>;

    async fn get_by_id(&self, id: StoreId) -> Result<Store, RepositoryError>;

    async fn delete(&self, id: StoreId, owner: UserId) -> Result<(), RepositoryError>;

    /// Replace the attributes of `store.store_id` where `store.user_id` is the owner.
    async fn update(&self, store: &Store) -> Result<(), RepositoryError>;

    async fn list_by_page(&self, page: Page, page_size: i64) -> Result<Vec<Store>, RepositoryError>;

    async fn search_by_page(
        &self,
        page: Page,
        page_size: i64,
        query: &str,
    ) -> Result<Vec<Store>, RepositoryError>;

    async fn health_check(&self) -> Result<(), RepositoryError>;
}
