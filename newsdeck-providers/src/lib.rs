//! News provider clients for the Newsdeck terminal
//!
//! This crate provides clients for fetching category headlines from:
//! - NewsAPI: primary provider for the standard categories
//! - GNews: fallback when NewsAPI returns nothing
//! - NewsData.io: last resort, and the only provider serving the
//!   extended categories (politics, crime, weather, ...)
//!
//! All three are thin JSON API clients; each normalizes its provider's
//! loosely-shaped records into [`newsdeck_core::Article`] at the fetch
//! boundary.

pub mod gnews;
pub mod newsapi;
pub mod newsdata;
pub mod provider;
pub mod types;

pub use gnews::GnewsClient;
pub use newsapi::NewsApiClient;
pub use newsdata::NewsDataClient;
pub use provider::NewsProvider;
