//! # signal-publisher
//!
//! Validation and submission of generated posts.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ ContentGenerator │────▶│  validate    │────▶│    Publisher     │
//! │ (analysis text)  │     │ ≤ 280 chars, │     │ X API v2, signed │
//! │                  │     │ non-empty    │     │ with OAuth 1.0a  │
//! └──────────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! Generation and validation failures end the workflow with a
//! [`PostOutcome`]; only publishing failures come back as errors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signal_publisher::{PostWorkflow, TwitterClient, TwitterCredentials};
//!
//! let client = TwitterClient::new(TwitterCredentials::from_lookup(|key| std::env::var(key).ok())?);
//! let workflow = PostWorkflow::new(Arc::new(analyst), Arc::new(client));
//! let outcome = workflow.post(&report_json).await?;
//! ```

mod console;
mod error;
mod oauth;
mod twitter;
mod validate;
mod workflow;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use console::ConsolePublisher;
pub use error::{PublishError, Result};
pub use oauth::OAuthSigner;
pub use twitter::{TwitterClient, TwitterCredentials};
pub use validate::{validate_content, ContentRejection, MAX_POST_CHARS};
pub use workflow::{PostOutcome, PostWorkflow};

/// A post accepted by the platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPost {
    pub id: String,
    pub text: String,
}

/// Destination for validated posts
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Submit `text`; failures are returned, never swallowed
    async fn publish(&self, text: &str) -> Result<PublishedPost>;

    /// Publisher name for logs
    fn name(&self) -> &str;
}
