//! Provider abstraction for interchangeable news sources

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use newsdeck_core::{Article, Category, NewsdeckError};

/// A news source that can serve category headlines
///
/// The service layer holds providers as an ordered trait-object list and
/// walks them until one yields a non-empty batch.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Name of the provider, used in logs and error context
    fn name(&self) -> &'static str;

    /// True when this provider can serve the given category
    fn supports(&self, _category: Category) -> bool {
        true
    }

    /// Fetch the latest headlines for a category
    async fn fetch(&self, category: Category) -> Result<Vec<Article>, NewsdeckError>;
}

/// Generate a stable article ID from its URL
pub(crate) fn article_id(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(&hasher.finalize()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_is_stable_and_url_derived() {
        let a = article_id("https://example.com/story");
        let b = article_id("https://example.com/story");
        let c = article_id("https://example.com/other");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
    }
}
