//! GNews API client
//!
//! First fallback when NewsAPI has nothing for a category.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, instrument};

use newsdeck_core::{Article, Category, NewsdeckError};

use crate::provider::{article_id, NewsProvider};
use crate::types::{GnewsArticle, GnewsResponse};

/// Base URL for the GNews REST API
const GNEWS_BASE: &str = "https://gnews.io/api/v4";

/// GNews API client
#[derive(Clone)]
pub struct GnewsClient {
    client: Client,
    api_key: String,
    base_url: String,
    country: String,
}

impl GnewsClient {
    /// Create a new GNews client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            base_url: GNEWS_BASE.to_string(),
            country: "in".to_string(),
        }
    }

    /// Override the country headlines are fetched for
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

#[async_trait]
impl NewsProvider for GnewsClient {
    fn name(&self) -> &'static str {
        "GNews"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, category: Category) -> Result<Vec<Article>, NewsdeckError> {
        let url = format!("{}/top-headlines", self.base_url);

        debug!(
            "Fetching GNews headlines: category={}, country={}",
            category, self.country
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", category.as_str()),
                ("country", self.country.as_str()),
                ("lang", "en"),
                ("token", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsdeckError::network(format!("GNews request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsdeckError::api(format!(
                "GNews error ({}): {}",
                status, body
            )));
        }

        let payload: GnewsResponse = response
            .json()
            .await
            .map_err(|e| NewsdeckError::parse(format!("Failed to parse GNews response: {}", e)))?;

        let articles: Vec<Article> = payload
            .articles
            .into_iter()
            .filter_map(convert_article)
            .collect();

        debug!(
            "GNews returned {} usable articles ({} total matches)",
            articles.len(),
            payload.total_articles
        );
        Ok(articles)
    }
}

/// Convert a GNews record, dropping unusable entries
fn convert_article(raw: GnewsArticle) -> Option<Article> {
    let title = raw.title.filter(|t| !t.trim().is_empty())?;
    let url = raw.url.filter(|u| !u.is_empty())?;

    Some(Article {
        id: article_id(&url),
        title,
        description: raw.description.filter(|d| !d.is_empty()),
        source: raw.source.and_then(|s| s.name),
        image_url: raw.image,
        published_at: raw.published_at.as_deref().and_then(parse_timestamp),
        url,
    })
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GnewsSource;

    #[test]
    fn convert_maps_image_and_source() {
        let article = convert_article(GnewsArticle {
            title: Some("Chip exports rebound".to_string()),
            description: None,
            url: Some("https://example.com/chips".to_string()),
            image: Some("https://example.com/chips.png".to_string()),
            published_at: Some("2025-06-02T11:00:00Z".to_string()),
            source: Some(GnewsSource {
                name: Some("GNews Wire".to_string()),
            }),
        })
        .unwrap();

        assert_eq!(article.image_url.as_deref(), Some("https://example.com/chips.png"));
        assert_eq!(article.source.as_deref(), Some("GNews Wire"));
        assert!(article.description.is_none());
    }

    #[test]
    fn convert_drops_missing_url() {
        let article = convert_article(GnewsArticle {
            title: Some("Headline".to_string()),
            description: None,
            url: None,
            image: None,
            published_at: None,
            source: None,
        });
        assert!(article.is_none());
    }
}
