//! DeepSeek LLM Provider
//!
//! Implementation of `LlmProvider` for DeepSeek's OpenAI-compatible
//! chat-completions API. Works against any endpoint speaking the same wire
//! format by overriding `base_url`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use signal_core::{
    error::{Result, SignalError},
    message::Message,
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage},
};

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// DeepSeek provider configuration
#[derive(Clone, Debug)]
pub struct DeepSeekConfig {
    /// Bearer key; requests fail with an auth error when absent
    pub api_key: Option<String>,

    /// API root, without the `/chat/completions` suffix
    pub base_url: String,
}

impl Default for DeepSeekConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl DeepSeekConfig {
    /// Build from any key/value source (environment, dotenv map, tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("DEEPSEEK_API_KEY").filter(|k| !k.trim().is_empty());
        let base_url = lookup("DEEPSEEK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Self { api_key, base_url }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// DeepSeek LLM provider
pub struct DeepSeekProvider {
    client: Client,
    config: DeepSeekConfig,
}

impl DeepSeekProvider {
    pub fn from_config(config: DeepSeekConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| SignalError::Auth("DEEPSEEK_API_KEY not set".into()))
    }

    /// Map a non-2xx response to the matching error variant
    fn status_error(status: StatusCode, body: String) -> SignalError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                SignalError::Auth(format!("{}: {}", status, body))
            }
            StatusCode::TOO_MANY_REQUESTS => SignalError::RateLimited(body),
            s if s.is_server_error() => {
                SignalError::ProviderUnavailable(format!("{}: {}", status, body))
            }
            _ => SignalError::Provider(format!("{}: {}", status, body)),
        }
    }

    fn convert_completion(response: ChatResponse, requested_model: &str) -> Result<Completion> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SignalError::MalformedResponse("no choices returned".into()))?;

        Ok(Completion {
            content: choice.message.content.unwrap_or_default(),
            model: response.model.unwrap_or_else(|| requested_model.to_string()),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from_wire),
        })
    }
}

#[async_trait]
impl LlmProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    async fn health_check(&self) -> Result<bool> {
        let api_key = self.api_key()?;
        match self
            .client
            .get(self.endpoint("models"))
            .bearer_auth(api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                tracing::warn!("DeepSeek health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let api_key = self.api_key()?;
        let request = ChatRequest {
            model: &options.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
        };

        tracing::debug!(model = %options.model, messages = messages.len(), "Sending chat completion");

        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SignalError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SignalError::MalformedResponse(e.to_string()))?;

        let completion = Self::convert_completion(body, &options.model)?;
        if let Some(usage) = &completion.usage {
            tracing::info!(
                prompt = usage.prompt_tokens,
                completion = usage.completion_tokens,
                total = usage.total_tokens,
                "DeepSeek token usage"
            );
        }

        Ok(completion)
    }
}
