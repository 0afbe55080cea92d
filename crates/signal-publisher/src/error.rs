//! Publishing Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PublishError>;

/// Publishing-related errors
#[derive(Error, Debug)]
pub enum PublishError {
    /// Required credentials absent at startup
    #[error("Missing environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    /// Request signing failed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Platform rejected the credentials or refused the action (401/403)
    #[error("Authentication failed (HTTP {status}): {body}")]
    Auth { status: u16, body: String },

    /// Rate limit exceeded
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response
    #[error("Platform error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Success status with an unreadable body
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local output failure (console publisher)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PublishError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            PublishError::MissingCredentials(_) => "Posting credentials are not configured.",
            PublishError::Auth { .. } => "The platform refused the request. Check the posting credentials and app permissions.",
            PublishError::RateLimited(_) => "Posting limit reached. Try again later.",
            PublishError::Api { .. } => "The platform refused the post.",
            _ => "An error occurred while posting.",
        }
    }
}
