//! Error types for quote operations

use thiserror::Error;

/// Errors raised while talking to the market-data provider.
///
/// These never escape the public `QuoteService` operations; they are
/// absorbed there into the sentinel price or a message string.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Provider client fault (unknown symbol, quota, malformed payload, ...)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for quote operations
pub type Result<T> = std::result::Result<T, QuoteError>;
