//! Health check endpoint

use axum::{routing::get, Json, Router};

use crate::AppState;

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /api/health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
