//! Reader session endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use newsdeck_core::Article;

use crate::AppState;

/// Create session routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/session/history", post(mark_read))
        .route("/session/trending", post(toggle_trending))
}

/// GET /api/session - current session state, history newest-first
async fn get_session(State(state): State<AppState>) -> Json<serde_json::Value> {
    let session = state.session.read().await;
    Json(serde_json::json!({
        "read_history": session.history(),
        "show_trending": session.show_trending(),
    }))
}

/// POST /api/session/history - record an opened article
async fn mark_read(
    State(state): State<AppState>,
    Json(article): Json<Article>,
) -> Json<serde_json::Value> {
    let mut session = state.session.write().await;
    let added = session.mark_read(article);
    Json(serde_json::json!({
        "added": added,
        "history_len": session.history_len(),
    }))
}

/// POST /api/session/trending - flip the trending panel flag
async fn toggle_trending(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut session = state.session.write().await;
    Json(serde_json::json!({
        "show_trending": session.toggle_trending(),
    }))
}
