//! API-specific wire types for the news providers

use serde::Deserialize;

// ============================================================================
// NewsAPI Types
// ============================================================================

/// NewsAPI top-headlines response
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    /// "ok" or "error"
    pub status: String,
    /// Matching articles
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

/// A single NewsAPI article
///
/// Delisted articles come back with every field set to "[Removed]"; the
/// conversion step drops them.
#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    /// Article headline
    pub title: Option<String>,
    /// Snippet or summary
    pub description: Option<String>,
    /// Link to the article
    pub url: Option<String>,
    /// Image URL
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    /// Publication date (ISO 8601)
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Source metadata
    pub source: Option<NewsApiSource>,
}

/// NewsAPI source metadata
#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    /// Display name of the source
    pub name: Option<String>,
}

// ============================================================================
// GNews Types
// ============================================================================

/// GNews top-headlines response
#[derive(Debug, Deserialize)]
pub struct GnewsResponse {
    /// Total number of matches available
    #[serde(rename = "totalArticles", default)]
    pub total_articles: u64,
    /// Matching articles
    #[serde(default)]
    pub articles: Vec<GnewsArticle>,
}

/// A single GNews article
#[derive(Debug, Deserialize)]
pub struct GnewsArticle {
    /// Article headline
    pub title: Option<String>,
    /// Snippet or summary
    pub description: Option<String>,
    /// Link to the article
    pub url: Option<String>,
    /// Image URL
    pub image: Option<String>,
    /// Publication date (ISO 8601)
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Source metadata
    pub source: Option<GnewsSource>,
}

/// GNews source metadata
#[derive(Debug, Deserialize)]
pub struct GnewsSource {
    /// Display name of the source
    pub name: Option<String>,
}

// ============================================================================
// NewsData.io Types
// ============================================================================

/// NewsData.io latest-news response
#[derive(Debug, Deserialize)]
pub struct NewsDataResponse {
    /// "success" or "error"
    pub status: String,
    /// Matching articles, absent on error responses
    pub results: Option<Vec<NewsDataArticle>>,
}

/// A single NewsData.io article
#[derive(Debug, Deserialize)]
pub struct NewsDataArticle {
    /// Article headline
    pub title: Option<String>,
    /// Snippet or summary
    pub description: Option<String>,
    /// Link to the article (NewsData calls this `link`, not `url`)
    pub link: Option<String>,
    /// Image URL
    pub image_url: Option<String>,
    /// Publication date ("YYYY-MM-DD HH:MM:SS", UTC)
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    /// Source identifier
    pub source_id: Option<String>,
}
