//! News Service
//!
//! Fetches category headlines through an ordered provider fallback chain
//! and serves recommendations over the freshest batch. Feeds are cached
//! per category with a short TTL so repeated reads of one category do not
//! hammer the providers.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use newsdeck_core::{Article, Category, NewsFeed};
use newsdeck_providers::NewsProvider;
use newsdeck_recommend::{recommend_scored, RankedArticle, DEFAULT_K};

/// Cache entry with expiration
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Configuration for NewsService
#[derive(Debug, Clone)]
pub struct NewsServiceConfig {
    /// Cache TTL for category feeds (in seconds)
    pub cache_ttl_secs: u64,
    /// Headlines shown per category
    pub headline_limit: usize,
    /// Articles in the trending panel
    pub trending_limit: usize,
    /// Recommendations returned when the caller does not ask for a count
    pub default_k: usize,
}

impl Default for NewsServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 60, // headline endpoints don't update faster than this
            headline_limit: 10,
            trending_limit: 5,
            default_k: DEFAULT_K,
        }
    }
}

/// News service walking the provider fallback chain
pub struct NewsService {
    providers: Vec<Box<dyn NewsProvider>>,
    config: NewsServiceConfig,
    /// Cache for category feed results
    feed_cache: RwLock<HashMap<Category, CacheEntry<Vec<Article>>>>,
}

impl NewsService {
    /// Create a new NewsService over an ordered provider list
    pub fn new(providers: Vec<Box<dyn NewsProvider>>, config: NewsServiceConfig) -> Self {
        info!(
            "Initializing NewsService with {} providers: {:?}",
            providers.len(),
            providers.iter().map(|p| p.name()).collect::<Vec<_>>()
        );
        Self {
            providers,
            config,
            feed_cache: RwLock::new(HashMap::new()),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &NewsServiceConfig {
        &self.config
    }

    /// Fetch the current batch for a category
    ///
    /// Providers are tried in order until one yields a non-empty batch;
    /// providers that do not serve the category are skipped, and a
    /// provider failure moves the chain along rather than failing the
    /// fetch. An empty feed is a normal, displayable result; the error
    /// case is reserved for every consulted provider failing.
    #[instrument(skip(self))]
    pub async fn fetch_category(&self, category: Category) -> Result<NewsFeed, NewsServiceError> {
        // Check cache first
        {
            let cache = self.feed_cache.read().await;
            if let Some(entry) = cache.get(&category) {
                if !entry.is_expired() {
                    debug!(
                        "Using cached {} feed ({} articles)",
                        category,
                        entry.data.len()
                    );
                    return Ok(NewsFeed::new(category, entry.data.clone()));
                }
            }
        }

        let articles = self.fetch_uncached(category).await?;

        // Update cache
        {
            let mut cache = self.feed_cache.write().await;
            cache.insert(
                category,
                CacheEntry::new(
                    articles.clone(),
                    Duration::from_secs(self.config.cache_ttl_secs),
                ),
            );
        }

        Ok(NewsFeed::new(category, articles))
    }

    /// Trending headlines: the general-category chain, truncated
    pub async fn trending(&self) -> Result<NewsFeed, NewsServiceError> {
        let mut feed = self.fetch_category(Category::General).await?;
        feed.articles.truncate(self.config.trending_limit);
        feed.total_count = feed.articles.len();
        Ok(feed)
    }

    /// Recommend articles similar to the selected one within a category
    ///
    /// Runs the engine over the category's current batch. Degenerate
    /// inputs (unknown title, too-small batch, empty text) come back as an
    /// empty list, which callers display as "no related articles".
    pub async fn recommend(
        &self,
        category: Category,
        selected_title: &str,
        k: Option<usize>,
    ) -> Result<Vec<RankedArticle>, NewsServiceError> {
        let feed = self.fetch_category(category).await?;
        let k = k.unwrap_or(self.config.default_k);
        let ranked = recommend_scored(&feed.articles, selected_title, k);
        info!(
            "Recommended {} of {} articles for {:?} in {}",
            ranked.len(),
            feed.total_count,
            selected_title,
            category
        );
        Ok(ranked)
    }

    /// Walk the provider chain for one category
    async fn fetch_uncached(&self, category: Category) -> Result<Vec<Article>, NewsServiceError> {
        if self.providers.is_empty() {
            return Err(NewsServiceError::NoProviders);
        }

        let mut consulted = 0usize;
        let mut failed = 0usize;

        for provider in &self.providers {
            if !provider.supports(category) {
                debug!("{} does not serve {}, skipping", provider.name(), category);
                continue;
            }
            consulted += 1;

            match provider.fetch(category).await {
                Ok(articles) if !articles.is_empty() => {
                    info!(
                        "{} returned {} articles for {}",
                        provider.name(),
                        articles.len(),
                        category
                    );
                    return Ok(articles);
                }
                Ok(_) => {
                    debug!("{} returned no articles for {}", provider.name(), category);
                }
                Err(e) => {
                    warn!("{} failed for {}: {}", provider.name(), category, e);
                    failed += 1;
                }
            }
        }

        if consulted > 0 && failed == consulted {
            return Err(NewsServiceError::AllProvidersFailed { category });
        }

        debug!("No provider had articles for {}", category);
        Ok(Vec::new())
    }
}

/// Errors that can occur in NewsService
#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("no news providers configured")]
    NoProviders,

    #[error("every provider failed for category {category}")]
    AllProvidersFailed { category: Category },
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use newsdeck_core::NewsdeckError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn article(title: &str) -> Article {
        Article {
            id: title.to_string(),
            title: title.to_string(),
            description: Some(format!("About {}", title)),
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            source: None,
            image_url: None,
            published_at: None,
        }
    }

    /// Scripted provider for chain tests
    struct StubProvider {
        name: &'static str,
        articles: Vec<Article>,
        fails: bool,
        extended_only: bool,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn with_articles(name: &'static str, articles: Vec<Article>) -> Self {
            Self {
                name,
                articles,
                fails: false,
                extended_only: false,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn empty(name: &'static str) -> Self {
            Self::with_articles(name, Vec::new())
        }

        fn failing(name: &'static str) -> Self {
            Self {
                fails: true,
                ..Self::empty(name)
            }
        }
    }

    #[async_trait]
    impl NewsProvider for StubProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn supports(&self, category: Category) -> bool {
            !self.extended_only || category.is_extended()
        }

        async fn fetch(&self, _category: Category) -> Result<Vec<Article>, NewsdeckError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fails {
                return Err(NewsdeckError::network("connection refused"));
            }
            Ok(self.articles.clone())
        }
    }

    fn service(providers: Vec<Box<dyn NewsProvider>>) -> NewsService {
        NewsService::new(providers, NewsServiceConfig::default())
    }

    #[tokio::test]
    async fn first_non_empty_provider_wins() {
        let svc = service(vec![
            Box::new(StubProvider::empty("first")),
            Box::new(StubProvider::with_articles("second", vec![article("From second")])),
            Box::new(StubProvider::with_articles("third", vec![article("From third")])),
        ]);

        let feed = svc.fetch_category(Category::General).await.unwrap();
        assert_eq!(feed.articles[0].title, "From second");
    }

    #[tokio::test]
    async fn provider_errors_move_the_chain_along() {
        let svc = service(vec![
            Box::new(StubProvider::failing("down")),
            Box::new(StubProvider::with_articles("backup", vec![article("Backup story")])),
        ]);

        let feed = svc.fetch_category(Category::Business).await.unwrap();
        assert_eq!(feed.articles[0].title, "Backup story");
    }

    #[tokio::test]
    async fn all_failing_providers_is_an_error() {
        let svc = service(vec![
            Box::new(StubProvider::failing("down")),
            Box::new(StubProvider::failing("also down")),
        ]);

        let result = svc.fetch_category(Category::General).await;
        assert!(matches!(
            result,
            Err(NewsServiceError::AllProvidersFailed { category: Category::General })
        ));
    }

    #[tokio::test]
    async fn all_empty_providers_is_an_empty_feed() {
        let svc = service(vec![
            Box::new(StubProvider::empty("first")),
            Box::new(StubProvider::empty("second")),
        ]);

        let feed = svc.fetch_category(Category::General).await.unwrap();
        assert!(feed.articles.is_empty());
        assert_eq!(feed.total_count, 0);
    }

    #[tokio::test]
    async fn unsupporting_providers_are_skipped() {
        let extended_only = StubProvider {
            extended_only: true,
            ..StubProvider::with_articles("newsdata", vec![article("Politics story")])
        };
        let svc = service(vec![
            Box::new(StubProvider::empty("newsapi")),
            Box::new(extended_only),
        ]);

        // The extended-only provider serves politics...
        let feed = svc.fetch_category(Category::Politics).await.unwrap();
        assert_eq!(feed.articles[0].title, "Politics story");

        // ...but is never consulted for a standard category.
        let feed = svc.fetch_category(Category::Sports).await.unwrap();
        assert!(feed.articles.is_empty());
    }

    #[tokio::test]
    async fn no_providers_is_a_configuration_error() {
        let svc = service(Vec::new());
        assert!(matches!(
            svc.fetch_category(Category::General).await,
            Err(NewsServiceError::NoProviders)
        ));
    }

    #[tokio::test]
    async fn category_feeds_are_cached() {
        let provider = StubProvider::with_articles("counted", vec![article("Cached story")]);
        let calls = Arc::clone(&provider.calls);
        let svc = service(vec![Box::new(provider)]);

        svc.fetch_category(Category::General).await.unwrap();
        svc.fetch_category(Category::General).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // A different category misses the cache
        svc.fetch_category(Category::Sports).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn trending_truncates_the_general_feed() {
        let articles: Vec<Article> = (0..8).map(|i| article(&format!("Story {}", i))).collect();
        let svc = service(vec![Box::new(StubProvider::with_articles("newsapi", articles))]);

        let feed = svc.trending().await.unwrap();
        assert_eq!(feed.articles.len(), 5);
        assert_eq!(feed.total_count, 5);
        assert_eq!(feed.articles[0].title, "Story 0");
    }

    #[tokio::test]
    async fn recommend_runs_the_engine_over_the_batch() {
        let svc = service(vec![Box::new(StubProvider::with_articles(
            "newsapi",
            vec![
                article("Cats and dogs"),
                article("Cats and dogs at home"),
                article("Quarterly earnings"),
            ],
        ))]);

        let ranked = svc
            .recommend(Category::General, "Cats and dogs", Some(2))
            .await
            .unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].article.title, "Cats and dogs at home");

        let none = svc
            .recommend(Category::General, "No such title", None)
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
