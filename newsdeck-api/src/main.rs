//! Newsdeck API Server
//!
//! HTTP API server over the news aggregation and recommendation services.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsdeck_providers::{GnewsClient, NewsApiClient, NewsDataClient, NewsProvider};
use newsdeck_services::{NewsService, NewsServiceConfig, SessionState};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
    /// Reader session state (read history, trending toggle)
    pub session: Arc<RwLock<SessionState>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,newsdeck_api=debug")),
        )
        .init();

    info!("Starting Newsdeck API");

    let country = std::env::var("NEWS_COUNTRY").unwrap_or_else(|_| "in".to_string());
    let providers = build_providers(&country);
    if providers.is_empty() {
        warn!("No provider API keys configured - every feed will come back empty");
    }

    let news_service = Arc::new(NewsService::new(providers, NewsServiceConfig::default()));
    let state = AppState {
        news_service,
        session: Arc::new(RwLock::new(SessionState::new())),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the provider chain from environment keys, in fallback order
///
/// A missing key drops that provider from the chain rather than failing
/// startup.
fn build_providers(country: &str) -> Vec<Box<dyn NewsProvider>> {
    let mut providers: Vec<Box<dyn NewsProvider>> = Vec::new();

    match std::env::var("NEWSAPI_KEY") {
        Ok(key) => providers.push(Box::new(NewsApiClient::new(key).with_country(country))),
        Err(_) => warn!("NEWSAPI_KEY not set, skipping NewsAPI"),
    }

    match std::env::var("GNEWS_API_KEY") {
        Ok(key) => providers.push(Box::new(GnewsClient::new(key).with_country(country))),
        Err(_) => warn!("GNEWS_API_KEY not set, skipping GNews"),
    }

    match std::env::var("NEWSDATA_API_KEY") {
        Ok(key) => providers.push(Box::new(NewsDataClient::new(key).with_country(country))),
        Err(_) => warn!("NEWSDATA_API_KEY not set, skipping NewsData.io"),
    }

    providers
}
