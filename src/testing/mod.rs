use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

use crate::auth::{Claims, JwtVerifier};
use crate::config::AppConfig;
use crate::database::models::{Store, StoreId, UserId};
use crate::database::repository::{RepositoryError, StoreRepository};
use crate::database::MemoryStoreRepository;
use crate::types::Page;
use crate::{app, AppState};

pub const TEST_SECRET: &str = "store-api-test-secret";

/// Sign a token for `user_id` that expires after `ttl`
pub fn token_with_expiry(user_id: UserId, ttl: chrono::Duration) -> String {
    let now = chrono::Utc::now();
    let claims = Claims {
        user_id,
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes()))
        .expect("test token encodes")
}

pub fn token_for(user_id: UserId) -> String {
    token_with_expiry(user_id, chrono::Duration::hours(1))
}

/// Application over `stores`, verifying tokens signed with `TEST_SECRET`
pub fn test_app_with(stores: Arc<dyn StoreRepository>) -> Router {
    let mut config = AppConfig::development();
    config.api.enable_request_logging = false;
    let state = AppState::new(stores, Arc::new(JwtVerifier::new(TEST_SECRET)));
    app(state, &config)
}

pub fn test_app() -> (Router, Arc<MemoryStoreRepository>) {
    let repo = Arc::new(MemoryStoreRepository::new());
    (test_app_with(repo.clone()), repo)
}

/// Build a request with an optional JSON body and bearer token
pub fn request(method: &str, uri: &str, user: Option<UserId>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(user)));
    }
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    builder.body(body).expect("request builds")
}

/// Drive one request through the router and decode the JSON response
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body reads");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

/// Repository whose every call fails, for fail-closed paths
pub struct UnavailableRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl StoreRepository for UnavailableRepository {
    async fn insert(&self, _store: &Store) -> Result<StoreId, RepositoryError> {
        Err(unavailable())
    }

    async fn get_by_id(&self, _id: StoreId) -> Result<Store, RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: StoreId, _owner: UserId) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn update(&self, _store: &Store) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn list_by_page(&self, _page: Page, _page_size: i64) -> Result<Vec<Store>, RepositoryError> {
        Err(unavailable())
    }

    async fn search_by_page(
        &self,
        _page: Page,
        _page_size: i64,
        _query: &str,
    ) -> Result<Vec<Store>, RepositoryError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

/// Memory repository whose mutations fail after reads succeed
pub struct ReadOnlyRepository(pub MemoryStoreRepository);

#[async_trait]
impl StoreRepository for ReadOnlyRepository {
    async fn insert(&self, store: &Store) -> Result<StoreId, RepositoryError> {
        self.0.insert(store).await
    }

    async fn get_by_id(&self, id: StoreId) -> Result<Store, RepositoryError> {
        self.0.get_by_id(id).await
    }

    async fn delete(&self, _id: StoreId, _owner: UserId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database is read-only".to_string()))
    }

    async fn update(&self, _store: &Store) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database is read-only".to_string()))
    }

    async fn list_by_page(&self, page: Page, page_size: i64) -> Result<Vec<Store>, RepositoryError> {
        self.0.list_by_page(page, page_size).await
    }

    async fn search_by_page(
        &self,
        page: Page,
        page_size: i64,
        query: &str,
    ) -> Result<Vec<Store>, RepositoryError> {
        self.0.search_by_page(page, page_size, query).await
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        self.0.health_check().await
    }
}
