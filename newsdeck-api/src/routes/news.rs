//! News feed and recommendation endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use newsdeck_core::Category;
use newsdeck_services::NewsServiceError;

use crate::AppState;

/// Query parameters for category feeds
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// Maximum number of headlines to return
    pub limit: Option<usize>,
}

/// Query parameters for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Title of the selected article
    pub title: Option<String>,
    /// Number of recommendations to return
    pub k: Option<usize>,
}

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news/{category}", get(get_category_news))
        .route("/news/{category}/recommendations", get(get_recommendations))
        .route("/trending", get(get_trending))
}

/// GET /api/news/:category - current headlines for a category
async fn get_category_news(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<FeedQuery>,
) -> Response {
    let Ok(category) = category.parse::<Category>() else {
        return unknown_category(&category);
    };

    match state.news_service.fetch_category(category).await {
        Ok(mut feed) => {
            let limit = params
                .limit
                .unwrap_or(state.news_service.config().headline_limit);
            // total_count keeps the full batch size so clients can tell a
            // truncated feed from a small one
            feed.articles.truncate(limit);
            (StatusCode::OK, Json(feed)).into_response()
        }
        Err(e) => service_error(e),
    }
}

/// GET /api/news/:category/recommendations?title=&k= - articles similar to
/// the selected one within the category's current batch
///
/// An empty list is a normal response ("no related articles"), never an
/// error.
async fn get_recommendations(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<RecommendQuery>,
) -> Response {
    let Ok(category) = category.parse::<Category>() else {
        return unknown_category(&category);
    };

    let title = match params.title {
        Some(t) if !t.is_empty() => t,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Query parameter 'title' is required"
                })),
            )
                .into_response();
        }
    };

    match state.news_service.recommend(category, &title, params.k).await {
        Ok(ranked) => (StatusCode::OK, Json(ranked)).into_response(),
        Err(e) => service_error(e),
    }
}

/// GET /api/trending - top general-category headlines
async fn get_trending(State(state): State<AppState>) -> Response {
    match state.news_service.trending().await {
        Ok(feed) => (StatusCode::OK, Json(feed)).into_response(),
        Err(e) => service_error(e),
    }
}

fn unknown_category(category: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "error": format!("Unknown category: {}", category)
        })),
    )
        .into_response()
}

fn service_error(e: NewsServiceError) -> Response {
    error!("News service error: {}", e);
    let status = match e {
        NewsServiceError::NoProviders => StatusCode::SERVICE_UNAVAILABLE,
        NewsServiceError::AllProvidersFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(serde_json::json!({
            "error": format!("Failed to fetch news: {}", e)
        })),
    )
        .into_response()
}
