//! Error Types

use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, SignalError>;

/// Text generation error types
#[derive(Error, Debug)]
pub enum SignalError {
    /// LLM provider returned an error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider answered but the payload was unusable
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Provider answered with no text
    #[error("Empty completion from {0}")]
    EmptyCompletion(String),

    /// Rate limited
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Auth(String),
}
