//! Article Recommendation Engine
//!
//! This crate turns a batch of articles into TF-IDF weighted term vectors
//! and ranks the batch by cosine similarity to a selected article.
//!
//! ## Features
//! - Build a term-weight model over a batch's titles and descriptions
//! - Calculate cosine similarity between weight vectors
//! - Return the top-K most similar articles, selected article excluded
//!
//! The model is rebuilt from scratch on every call and nothing is shared
//! across calls, so the engine is safe to invoke from concurrent requests.

pub mod recommender;
pub mod similarity;
pub mod vectorizer;

pub use recommender::{recommend, recommend_scored, RankedArticle, DEFAULT_K};
pub use similarity::cosine_similarity;
pub use vectorizer::{TfidfVectorizer, MAX_FEATURES};
