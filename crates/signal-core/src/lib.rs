//! # signal-core
//!
//! Provider-agnostic text generation for the chain-signal bot.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     ContentGenerator                          │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │ Prompt build │──▶│ LlmProvider  │──▶│  Post formatting │  │
//! │  │              │   │  (Strategy)  │   │                  │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait lets the analyst run against DeepSeek, Ollama or
//! any other chat-completion backend without touching the generation logic.

pub mod error;
pub mod generator;
pub mod message;
pub mod provider;

pub use error::{Result, SignalError};
pub use generator::ContentGenerator;
pub use message::{Message, Role};
pub use provider::{Completion, GenerationOptions, LlmProvider};
