//! Application Configuration
//!
//! Built once at startup from the environment and handed to each component.

use std::str::FromStr;

use crypto_analyst::CoinGeckoConfig;
use signal_core::GenerationOptions;
use signal_publisher::{PublishError, TwitterCredentials};
use signal_runtime::{DeepSeekConfig, OllamaConfig};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown LLM_PROVIDER '{0}' (expected 'deepseek' or 'ollama')")]
    UnknownProvider(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Credentials(#[from] PublishError),
}

/// Which chat-completion backend to use
#[derive(Clone, Debug)]
pub enum LlmBackend {
    DeepSeek(DeepSeekConfig),
    Ollama(OllamaConfig),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub coingecko: CoinGeckoConfig,
    pub llm: LlmBackend,
    pub generation: GenerationOptions,
    /// Present only when posting is enabled
    pub twitter: Option<TwitterCredentials>,
}

impl AppConfig {
    /// Build from any key/value source. Posting credentials are required
    /// when `posting` is set and every missing one is reported together.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, posting: bool) -> Result<Self, ConfigError> {
        let provider = lookup("LLM_PROVIDER").unwrap_or_else(|| "deepseek".into());
        let (llm, default_model) = match provider.trim().to_lowercase().as_str() {
            "deepseek" => (
                LlmBackend::DeepSeek(DeepSeekConfig::from_lookup(&lookup)),
                lookup("DEEPSEEK_MODEL").unwrap_or_else(|| "deepseek-reasoner".into()),
            ),
            "ollama" => (
                LlmBackend::Ollama(OllamaConfig::from_lookup(&lookup)),
                lookup("OLLAMA_MODEL").unwrap_or_else(|| "llama3.2".into()),
            ),
            _ => return Err(ConfigError::UnknownProvider(provider)),
        };

        let mut generation = GenerationOptions::default().with_model(default_model);
        if let Some(temperature) = parsed(&lookup, "LLM_TEMPERATURE")? {
            generation.temperature = temperature;
        }
        if let Some(max_tokens) = parsed(&lookup, "LLM_MAX_TOKENS")? {
            generation.max_tokens = max_tokens;
        }

        let twitter = if posting {
            Some(TwitterCredentials::from_lookup(&lookup)?)
        } else {
            None
        };

        Ok(Self {
            coingecko: CoinGeckoConfig::from_lookup(&lookup),
            llm,
            generation,
            twitter,
        })
    }

    pub fn from_env(posting: bool) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), posting)
    }
}

fn parsed<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)], posting: bool) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned(), posting)
    }

    #[test]
    fn test_dry_run_needs_no_credentials() {
        let config = config(&[], false).unwrap();
        assert!(config.twitter.is_none());
        assert!(config.coingecko.api_key.is_none());
        assert_eq!(config.generation.model, "deepseek-reasoner");
        assert!(matches!(config.llm, LlmBackend::DeepSeek(ref c) if c.api_key.is_none()));
    }

    #[test]
    fn test_posting_fails_fast_without_credentials() {
        let err = config(&[("API_KEY", "ck")], true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing environment variables: API_SECRET, ACCESS_TOKEN, ACCESS_TOKEN_SECRET"
        );
    }

    #[test]
    fn test_posting_with_credentials() {
        let config = config(
            &[
                ("API_KEY", "ck"),
                ("API_SECRET", "cs"),
                ("ACCESS_TOKEN", "at"),
                ("ACCESS_TOKEN_SECRET", "ats"),
                ("COIN_GECKO_API_KEY", "CG-1"),
            ],
            true,
        )
        .unwrap();
        assert_eq!(config.twitter.unwrap().api_key, "ck");
        assert_eq!(config.coingecko.api_key.as_deref(), Some("CG-1"));
    }

    #[test]
    fn test_ollama_backend() {
        let config = config(&[("LLM_PROVIDER", "Ollama"), ("OLLAMA_PORT", "8080")], false).unwrap();
        assert_eq!(config.generation.model, "llama3.2");
        assert!(matches!(config.llm, LlmBackend::Ollama(ref c) if c.port == 8080));
    }

    #[test]
    fn test_unknown_provider() {
        let err = config(&[("LLM_PROVIDER", "gpt")], false).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProvider(ref p) if p == "gpt"));
    }

    #[test]
    fn test_generation_overrides() {
        let config = config(&[("LLM_TEMPERATURE", "0.2"), ("LLM_MAX_TOKENS", "200")], false).unwrap();
        assert_eq!(config.generation.temperature, 0.2);
        assert_eq!(config.generation.max_tokens, 200);

        let err = config_err(&[("LLM_MAX_TOKENS", "lots")]);
        assert!(matches!(err, ConfigError::InvalidValue { key: "LLM_MAX_TOKENS", .. }));
    }

    fn config_err(vars: &[(&str, &str)]) -> ConfigError {
        config(vars, false).unwrap_err()
    }
}
