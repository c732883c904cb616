use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::TokenVerifier;
use crate::config::AppConfig;
use crate::database::repository::StoreRepository;
use crate::handlers;

/// Collaborators shared by every request. Holds no mutable state of its own.
#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<dyn StoreRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(stores: Arc<dyn StoreRepository>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { stores, verifier }
    }
}

/// Build the HTTP application with its configured middleware
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(store_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    let router = if config.security.enable_cors {
        router.layer(cors_layer(&config.security.cors_origins))
    } else {
        router
    };

    let router = if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn store_routes() -> Router<AppState> {
    use handlers::stores;

    Router::new()
        .route("/stores", post(stores::create).put(stores::update))
        .route("/stores/search", post(stores::search))
        .route("/stores/page/:page", get(stores::list))
        .route("/stores/:id", get(stores::detail).delete(stores::delete))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
