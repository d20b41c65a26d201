//! Error types for the terminal

use thiserror::Error;

/// Terminal-wide error type
#[derive(Error, Debug)]
pub enum NewsdeckError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NewsdeckError {
    pub fn api(msg: impl Into<String>) -> Self {
        NewsdeckError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        NewsdeckError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        NewsdeckError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        NewsdeckError::NotFound(msg.into())
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        NewsdeckError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        NewsdeckError::Config(msg.into())
    }
}

/// Result type alias for terminal operations
pub type NewsdeckResult<T> = Result<T, NewsdeckError>;
