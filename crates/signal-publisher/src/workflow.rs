//! Post Workflow
//!
//! generate → validate → publish, once per call.

use std::sync::Arc;

use signal_core::ContentGenerator;

use crate::error::Result;
use crate::validate::{validate_content, ContentRejection};
use crate::{PublishedPost, Publisher};

/// How a posting attempt ended without a publishing error
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostOutcome {
    Posted(PublishedPost),
    /// Refused locally; the publisher was never called
    Rejected(ContentRejection),
    /// The generator failed; carries the logged reason
    NotGenerated(String),
}

impl PostOutcome {
    pub fn is_posted(&self) -> bool {
        matches!(self, PostOutcome::Posted(_))
    }
}

pub struct PostWorkflow {
    generator: Arc<dyn ContentGenerator>,
    publisher: Arc<dyn Publisher>,
}

impl PostWorkflow {
    pub fn new(generator: Arc<dyn ContentGenerator>, publisher: Arc<dyn Publisher>) -> Self {
        Self { generator, publisher }
    }

    /// Run the full workflow for `input`.
    ///
    /// Only publishing failures are returned as errors.
    pub async fn post(&self, input: &str) -> Result<PostOutcome> {
        let content = match self.generator.generate_content(input).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(error = %e, "Analysis generation failed");
                return Ok(PostOutcome::NotGenerated(e.to_string()));
            }
        };

        self.post_content(&content).await
    }

    /// Validate already generated content and publish it
    pub async fn post_content(&self, content: &str) -> Result<PostOutcome> {
        if let Err(rejection) = validate_content(content) {
            tracing::warn!(chars = content.chars().count(), "{}", rejection);
            return Ok(PostOutcome::Rejected(rejection));
        }

        tracing::debug!(publisher = self.publisher.name(), "Publishing post");
        let post = self.publisher.publish(content).await?;
        Ok(PostOutcome::Posted(post))
    }
}
