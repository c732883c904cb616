use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use tracing::debug;

use crate::database::models::{Store, StoreId, StoreRow, UserId};
use crate::database::repository::{RepositoryError, StoreRepository};
use crate::types::Page;

/// PostgreSQL-backed store repository.
///
/// Expects a `stores` table:
///
/// ```sql
/// CREATE TABLE stores (
///     store_id   BIGSERIAL PRIMARY KEY,
///     user_id    BIGINT NOT NULL,
///     attributes JSONB NOT NULL DEFAULT '{}'
/// );
/// ```
#[derive(Clone)]
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE metacharacters so the search term matches literally
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn insert(&self, store: &Store) -> Result<StoreId, RepositoryError> {
        let id = sqlx::query_scalar::<_, StoreId>(
            "INSERT INTO stores (user_id, attributes) VALUES ($1, $2) RETURNING store_id",
        )
        .bind(store.user_id)
        .bind(Json(&store.attributes))
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: StoreId) -> Result<Store, RepositoryError> {
        sqlx::query_as::<_, StoreRow>(
            "SELECT store_id, user_id, attributes FROM stores WHERE store_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Store::from)
        .ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: StoreId, owner: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM stores WHERE store_id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn update(&self, store: &Store) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE stores SET attributes = $3 WHERE store_id = $1 AND user_id = $2",
        )
        .bind(store.store_id)
        .bind(store.user_id)
        .bind(Json(&store.attributes))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(store.store_id));
        }
        Ok(())
    }

    async fn list_by_page(&self, page: Page, page_size: i64) -> Result<Vec<Store>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoreRow>(
            "SELECT store_id, user_id, attributes FROM stores ORDER BY store_id LIMIT $1 OFFSET $2",
        )
        .bind(page_size)
        .bind(page.offset(page_size))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Store::from).collect())
    }

    async fn search_by_page(
        &self,
        page: Page,
        page_size: i64,
        query: &str,
    ) -> Result<Vec<Store>, RepositoryError> {
        if query.is_empty() {
            return self.list_by_page(page, page_size).await;
        }

        let pattern = like_pattern(query);
        debug!("Searching stores page {} with pattern {}", page, pattern);

        let rows = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT store_id, user_id, attributes
            FROM stores
            WHERE EXISTS (
                SELECT 1 FROM jsonb_each_text(attributes) AS kv(key, value)
                WHERE kv.value ILIKE $1 ESCAPE '\'
            )
            ORDER BY store_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(page_size)
        .bind(page.offset(page_size))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Store::from).collect())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
