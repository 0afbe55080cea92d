//! Content Generator Contract
//!
//! A content generator turns structured input (a serialized report) into
//! text ready to be published.

use async_trait::async_trait;

use crate::error::Result;

/// Single-method contract implemented by every content generator
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate publishable text from the given input context
    async fn generate_content(&self, input: &str) -> Result<String>;
}
