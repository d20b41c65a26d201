//! Core types for the Newsdeck terminal
//!
//! This crate defines the shared data structures used across the terminal:
//! article records, news categories, and the workspace error type.

pub mod article;
pub mod category;
pub mod error;

pub use article::{Article, NewsFeed};
pub use category::Category;
pub use error::{NewsdeckError, NewsdeckResult};
