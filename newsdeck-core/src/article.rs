//! Article data structures for news aggregation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Category;

/// A news article as normalized at the fetch boundary
///
/// Providers return loosely-shaped records; every provider client converts
/// them into this fixed shape before they reach any other crate. Records
/// without a usable title or URL are dropped at that boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier (hash of URL)
    pub id: String,
    /// Article title, the identity key within a batch
    pub title: String,
    /// Brief summary/excerpt, absent for some providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link to the full article, treated as opaque
    pub url: String,
    /// Name of the news source (e.g., "Reuters")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Article thumbnail/image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Publication date, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// The text the recommendation engine vectorizes: title and description
    /// joined by a single space. A missing description contributes nothing
    /// but the separator.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description.as_deref().unwrap_or(""))
    }
}

/// A batch of articles returned by one category fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsFeed {
    /// Articles in provider order
    pub articles: Vec<Article>,
    /// Category the batch was fetched for
    pub category: Category,
    /// Number of articles in the batch
    pub total_count: usize,
}

impl NewsFeed {
    /// Create a feed from a batch of articles
    pub fn new(category: Category, articles: Vec<Article>) -> Self {
        Self {
            total_count: articles.len(),
            articles,
            category,
        }
    }
}
