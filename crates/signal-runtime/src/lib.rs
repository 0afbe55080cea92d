//! # signal-runtime
//!
//! Concrete `LlmProvider` implementations.
//!
//! ## Providers
//!
//! - **DeepSeek** (default): OpenAI-compatible `/chat/completions` over HTTPS
//! - **Ollama**: local inference through `ollama-rs`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signal_runtime::{DeepSeekConfig, DeepSeekProvider};
//!
//! let provider = DeepSeekProvider::from_config(DeepSeekConfig::from_lookup(|key| std::env::var(key).ok()));
//! let completion = provider.complete(&messages, &options).await?;
//! ```

#[cfg(feature = "deepseek")]
pub mod deepseek;

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(feature = "deepseek")]
pub use deepseek::{DeepSeekConfig, DeepSeekProvider};

#[cfg(feature = "ollama")]
pub use ollama::{OllamaConfig, OllamaProvider};

// Re-export core types for convenience
pub use signal_core::{Completion, GenerationOptions, LlmProvider, Message, Result, Role, SignalError};
