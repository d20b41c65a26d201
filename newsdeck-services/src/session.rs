//! Reader session state
//!
//! Read history and the trending-panel flag are display state owned by the
//! host application; the recommendation engine never sees them. The host
//! keeps one of these per session and passes it into display logic.

use newsdeck_core::Article;

/// Per-reader session state
#[derive(Debug, Default)]
pub struct SessionState {
    read_history: Vec<Article>,
    show_trending: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an opened article
    ///
    /// Returns false when the article (by URL) was already in the history.
    pub fn mark_read(&mut self, article: Article) -> bool {
        if self.read_history.iter().any(|a| a.url == article.url) {
            return false;
        }
        self.read_history.push(article);
        true
    }

    /// Read articles, most recently opened first
    pub fn history(&self) -> Vec<&Article> {
        self.read_history.iter().rev().collect()
    }

    /// Number of distinct articles read
    pub fn history_len(&self) -> usize {
        self.read_history.len()
    }

    /// Flip the trending panel flag, returning the new value
    pub fn toggle_trending(&mut self) -> bool {
        self.show_trending = !self.show_trending;
        self.show_trending
    }

    /// Whether the trending panel is shown
    pub fn show_trending(&self) -> bool {
        self.show_trending
    }
}
