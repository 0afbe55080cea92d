//! Technical Analysis Generator
//!
//! Turns a serialized [`AssetReport`](crate::model::AssetReport) into a short
//! technical-analysis post via an [`LlmProvider`].

use std::sync::Arc;

use async_trait::async_trait;
use signal_core::{
    ContentGenerator, GenerationOptions, LlmProvider, Message, Result, SignalError,
};

use crate::post_format::PostTemplate;
use crate::ANALYST_SYSTEM_PROMPT;

/// Build the user prompt for `token` with the report JSON appended
pub fn build_prompt(token: &str, report_json: &str) -> String {
    format!(
        "Provide concise technical analysis for {token} including:\n\
         - RSI (3-5 word sentiment)\n\
         - Key moving averages (5 words max)\n\
         - MACD trend (3 words max)\n\
         - Support/resistance levels (simple format)\n\
         - Chart pattern observation\n\
         - Buy/sell signals use ↓ or ↑\n\
         - dont add number of characters\n\
         - make it a human readable simple english paragraph\n\
         IMPORTANT: Keep under 250 characters. Use crypto trading abbreviations.\n\
         Latest CoinInfo: {report_json}"
    )
}

/// LLM-backed technical analyst for one token
pub struct TechnicalAnalyst {
    provider: Arc<dyn LlmProvider>,
    options: GenerationOptions,
    template: PostTemplate,
}

impl TechnicalAnalyst {
    pub fn new(provider: Arc<dyn LlmProvider>, token: impl AsRef<str>) -> Self {
        Self {
            provider,
            options: GenerationOptions::default(),
            template: PostTemplate::new(token),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_template(mut self, template: PostTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn token(&self) -> &str {
        self.template.token()
    }

    /// One completion call; returns the trimmed analysis text
    pub async fn technical_analysis(&self, report_json: &str) -> Result<String> {
        let prompt = build_prompt(self.token(), report_json);
        tracing::debug!(
            provider = self.provider.name(),
            prompt_tokens = self.provider.estimate_tokens(&prompt),
            "Requesting technical analysis"
        );

        let messages = [Message::system(ANALYST_SYSTEM_PROMPT), Message::user(prompt)];
        let completion = self.provider.complete(&messages, &self.options).await?;

        if completion.truncated() {
            tracing::warn!(model = %completion.model, "Analysis hit the max_tokens limit");
        }

        let analysis = completion.content.trim();
        if analysis.is_empty() {
            return Err(SignalError::EmptyCompletion(self.provider.name().to_string()));
        }
        Ok(analysis.to_string())
    }
}

#[async_trait]
impl ContentGenerator for TechnicalAnalyst {
    /// Analysis wrapped in the post template
    async fn generate_content(&self, input: &str) -> Result<String> {
        let analysis = self.technical_analysis(input).await?;
        Ok(self.template.render(&analysis))
    }
}
