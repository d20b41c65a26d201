//! Business logic services for the Newsdeck terminal
//!
//! This crate provides the service layer that walks the provider fallback
//! chain, caches category feeds, runs the recommendation engine over the
//! current batch, and models per-reader session state.

pub mod news_service;
pub mod session;

pub use news_service::{NewsService, NewsServiceConfig, NewsServiceError};
pub use session::SessionState;
