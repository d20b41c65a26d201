//! NewsData.io client
//!
//! Last provider in the fallback chain, and the only one serving the
//! extended categories (politics, crime, environment, ...).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use newsdeck_core::{Article, Category, NewsdeckError};

use crate::provider::{article_id, NewsProvider};
use crate::types::{NewsDataArticle, NewsDataResponse};

/// Base URL for the NewsData.io REST API
const NEWSDATA_BASE: &str = "https://newsdata.io/api/1";

/// NewsData.io client
#[derive(Clone)]
pub struct NewsDataClient {
    client: Client,
    api_key: String,
    base_url: String,
    country: String,
}

impl NewsDataClient {
    /// Create a new NewsData.io client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            base_url: NEWSDATA_BASE.to_string(),
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
impl NewsProvider for NewsDataClient {
    fn name(&self) -> &'static str {
        "NewsData.io"
    }

    /// NewsData.io is only consulted for the categories the other
    /// providers do not carry
    fn supports(&self, category: Category) -> bool {
        category.is_extended()
    }

    #[instrument(skip(self))]
    async fn fetch(&self, category: Category) -> Result<Vec<Article>, NewsdeckError> {
        let url = format!("{}/news", self.base_url);

        debug!(
            "Fetching NewsData.io headlines: category={}, country={}",
            category, self.country
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", category.as_str()),
                ("country", self.country.as_str()),
                ("language", "en"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsdeckError::network(format!("NewsData.io request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsdeckError::api(format!(
                "NewsData.io error ({}): {}",
                status, body
            )));
        }

        let payload: NewsDataResponse = response.json().await.map_err(|e| {
            NewsdeckError::parse(format!("Failed to parse NewsData.io response: {}", e))
        })?;

        // A non-success payload is not worth failing the chain over; the
        // provider is the last resort anyway.
        if payload.status != "success" {
            warn!("NewsData.io returned status {:?}", payload.status);
            return Ok(Vec::new());
        }

        let articles: Vec<Article> = payload
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(convert_article)
            .collect();

        debug!("NewsData.io returned {} usable articles", articles.len());
        Ok(articles)
    }
}

/// Convert a NewsData.io record, dropping unusable entries
fn convert_article(raw: NewsDataArticle) -> Option<Article> {
    let title = raw.title.filter(|t| !t.trim().is_empty())?;
    let url = raw.link.filter(|u| !u.is_empty())?;

    Some(Article {
        id: article_id(&url),
        title,
        description: raw.description.filter(|d| !d.is_empty()),
        source: raw.source_id,
        image_url: raw.image_url,
        published_at: raw.pub_date.as_deref().and_then(parse_timestamp),
        url,
    })
}

/// NewsData.io reports dates as "YYYY-MM-DD HH:MM:SS" in UTC
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_only_extended_categories() {
        let client = NewsDataClient::new("key".to_string());
        assert!(client.supports(Category::Politics));
        assert!(client.supports(Category::Weather));
        assert!(!client.supports(Category::General));
        assert!(!client.supports(Category::Sports));
    }

    #[test]
    fn convert_maps_link_to_url() {
        let article = convert_article(NewsDataArticle {
            title: Some("Air quality alert".to_string()),
            description: Some("Officials warn of smog".to_string()),
            link: Some("https://example.com/aqi".to_string()),
            image_url: None,
            pub_date: Some("2025-06-03 06:15:00".to_string()),
            source_id: Some("example_times".to_string()),
        })
        .unwrap();

        assert_eq!(article.url, "https://example.com/aqi");
        assert_eq!(article.source.as_deref(), Some("example_times"));
        assert!(article.published_at.is_some());
    }

    #[test]
    fn parse_timestamp_accepts_newsdata_format() {
        assert!(parse_timestamp("2025-06-03 06:15:00").is_some());
        assert!(parse_timestamp("2025-06-03T06:15:00Z").is_none());
    }
}
