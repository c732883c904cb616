use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::middleware::ApiResponse;

/// GET / - describe the API
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Store API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "create": "POST /stores (bearer token)",
            "update": "PUT /stores (bearer token)",
            "delete": "DELETE /stores/:id (bearer token)",
            "detail": "GET /stores/:id",
            "list": "GET /stores/page/:page",
            "search": "POST /stores/search",
            "health": "GET /health",
        }
    }))
}

/// GET /health - report whether the store repository is reachable
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    let now = chrono::Utc::now();

    match state.stores.health_check().await {
        Ok(()) => ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "storage": "ok"
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiResponse::with_status(
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "storage_error": e.to_string()
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            )
        }
    }
}
