use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::database::models::{Store, StoreId, UserId};
use crate::database::repository::{RepositoryError, StoreRepository};
use crate::types::Page;

/// Process-local store repository, used for `--in-memory` runs and tests
#[derive(Debug, Default)]
pub struct MemoryStoreRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    stores: BTreeMap<StoreId, Store>,
}

impl MemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.stores.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn page_of<'a>(
    stores: impl Iterator<Item = &'a Store>,
    page: Page,
    page_size: i64,
) -> Vec<Store> {
    let skip = usize::try_from(page.offset(page_size)).unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(0);
    stores.skip(skip).take(take).cloned().collect()
}

#[async_trait]
impl StoreRepository for MemoryStoreRepository {
    async fn insert(&self, store: &Store) -> Result<StoreId, RepositoryError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = StoreId(inner.last_id);

        let mut record = store.clone();
        record.store_id = id;
        inner.stores.insert(id, record);
        Ok(id)
    }

    async fn get_by_id(&self, id: StoreId) -> Result<Store, RepositoryError> {
        self.inner
            .read()
            .await
            .stores
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: StoreId, owner: UserId) -> Result<(), RepositoryError> {
        let mut inner = self.inner.write().await;
        match inner.stores.get(&id) {
            Some(existing) if existing.user_id == owner => {
                inner.stores.remove(&id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn update(&self, store: &Store) -> Result<(), RepositoryError> {
        let mut inner = self.inner.write().await;
        match inner.stores.get_mut(&store.store_id) {
            Some(existing) if existing.user_id == store.user_id => {
                existing.attributes = store.attributes.clone();
                Ok(())
            }
            _ => Err(RepositoryError::NotFound(store.store_id)),
        }
    }

    async fn list_by_page(&self, page: Page, page_size: i64) -> Result<Vec<Store>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(page_of(inner.stores.values(), page, page_size))
    }

    async fn search_by_page(
        &self,
        page: Page,
        page_size: i64,
        query: &str,
    ) -> Result<Vec<Store>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(page_of(
            inner.stores.values().filter(|s| s.matches(query)),
            page,
            page_size,
        ))
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(owner: i64, name: &str) -> Store {
        let mut store: Store = serde_json::from_value(json!({ "name": name })).unwrap();
        store.user_id = UserId(owner);
        store
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = MemoryStoreRepository::new();
        let a = repo.insert(&store(1, "a")).await.unwrap();
        let b = repo.insert(&store(1, "b")).await.unwrap();
        assert_eq!(a, StoreId(1));
        assert_eq!(b, StoreId(2));
        assert_eq!(repo.get_by_id(b).await.unwrap().store_id, b);
    }

    #[tokio::test]
    async fn mutations_require_current_owner() {
        let repo = MemoryStoreRepository::new();
        let id = repo.insert(&store(1, "mine")).await.unwrap();

        let mut hijack = store(2, "theirs");
        hijack.store_id = id;
        assert!(matches!(repo.update(&hijack).await, Err(RepositoryError::NotFound(_))));
        assert!(matches!(repo.delete(id, UserId(2)).await, Err(RepositoryError::NotFound(_))));
        assert_eq!(repo.get_by_id(id).await.unwrap().attributes["name"], json!("mine"));

        repo.delete(id, UserId(1)).await.unwrap();
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn pages_are_disjoint_and_ordered() {
        let repo = MemoryStoreRepository::new();
        for i in 0..15 {
            repo.insert(&store(1, &format!("store-{i}"))).await.unwrap();
        }

        let first = repo.list_by_page(Page::new(1), 10).await.unwrap();
        let second = repo.list_by_page(Page::new(2), 10).await.unwrap();
        let third = repo.list_by_page(Page::new(3), 10).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 5);
        assert!(third.is_empty());
        assert_eq!(first[0].store_id, StoreId(1));
        assert_eq!(second[0].store_id, StoreId(11));
    }

    #[tokio::test]
    async fn search_filters_before_paging() {
        let repo = MemoryStoreRepository::new();
        for i in 0..12 {
            let name = if i % 2 == 0 { format!("Bakery {i}") } else { format!("Garage {i}") };
            repo.insert(&store(1, &name)).await.unwrap();
        }

        let bakeries = repo.search_by_page(Page::new(1), 10, "bakery").await.unwrap();
        assert_eq!(bakeries.len(), 6);
        assert!(bakeries.iter().all(|s| s.matches("Bakery")));

        let everything = repo.search_by_page(Page::new(1), 10, "").await.unwrap();
        assert_eq!(everything, repo.list_by_page(Page::new(1), 10).await.unwrap());
    }
}
