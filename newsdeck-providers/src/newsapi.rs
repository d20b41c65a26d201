//! NewsAPI client
//!
//! Primary provider for standard category headlines.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, instrument};

use newsdeck_core::{Article, Category, NewsdeckError};

use crate::provider::{article_id, NewsProvider};
use crate::types::{NewsApiArticle, NewsApiResponse};

/// Base URL for the NewsAPI REST API
const NEWSAPI_BASE: &str = "https://newsapi.org/v2";

/// NewsAPI client
#[derive(Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    country: String,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            base_url: NEWSAPI_BASE.to_string(),
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
impl NewsProvider for NewsApiClient {
    fn name(&self) -> &'static str {
        "NewsAPI"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, category: Category) -> Result<Vec<Article>, NewsdeckError> {
        let url = format!("{}/top-headlines", self.base_url);

        debug!(
            "Fetching NewsAPI headlines: category={}, country={}",
            category, self.country
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", category.as_str()),
                ("country", self.country.as_str()),
                ("language", "en"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsdeckError::network(format!("NewsAPI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsdeckError::api(format!(
                "NewsAPI error ({}): {}",
                status, body
            )));
        }

        let payload: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| NewsdeckError::parse(format!("Failed to parse NewsAPI response: {}", e)))?;

        if payload.status != "ok" {
            return Err(NewsdeckError::provider(
                "NewsAPI",
                format!("unexpected response status: {}", payload.status),
            ));
        }

        let articles: Vec<Article> = payload
            .articles
            .into_iter()
            .filter_map(convert_article)
            .collect();

        debug!("NewsAPI returned {} usable articles", articles.len());
        Ok(articles)
    }
}

/// Convert a NewsAPI record, dropping delisted and unusable entries
fn convert_article(raw: NewsApiArticle) -> Option<Article> {
    let title = raw.title.filter(|t| !t.trim().is_empty() && t != "[Removed]")?;
    let url = raw.url.filter(|u| !u.is_empty())?;

    Some(Article {
        id: article_id(&url),
        title,
        description: raw.description.filter(|d| !d.is_empty()),
        source: raw.source.and_then(|s| s.name),
        image_url: raw.url_to_image,
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
    use crate::types::NewsApiSource;

    fn raw(title: Option<&str>, url: Option<&str>) -> NewsApiArticle {
        NewsApiArticle {
            title: title.map(String::from),
            description: Some("A description".to_string()),
            url: url.map(String::from),
            url_to_image: None,
            published_at: Some("2025-06-01T08:30:00Z".to_string()),
            source: Some(NewsApiSource {
                name: Some("The Hindu".to_string()),
            }),
        }
    }

    #[test]
    fn convert_keeps_usable_articles() {
        let article = convert_article(raw(Some("Monsoon arrives"), Some("https://example.com/m")))
            .unwrap();
        assert_eq!(article.title, "Monsoon arrives");
        assert_eq!(article.source.as_deref(), Some("The Hindu"));
        assert!(article.published_at.is_some());
        assert_eq!(article.id.len(), 16);
    }

    #[test]
    fn convert_drops_removed_tombstones() {
        assert!(convert_article(raw(Some("[Removed]"), Some("https://removed.com"))).is_none());
    }

    #[test]
    fn convert_drops_missing_title_or_url() {
        assert!(convert_article(raw(None, Some("https://example.com"))).is_none());
        assert!(convert_article(raw(Some("  "), Some("https://example.com"))).is_none());
        assert!(convert_article(raw(Some("Headline"), None)).is_none());
    }

    #[test]
    fn newsapi_serves_every_category() {
        let client = NewsApiClient::new("key".to_string());
        assert!(client.supports(Category::General));
        assert!(client.supports(Category::Weather));
    }
}
