//! # crypto-analyst
//!
//! Market snapshot → compact report → LLM technical-analysis post.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────┐   ┌───────────────────┐
//! │ CoinGecko    │──▶│ extract_     │──▶│ Reporter │──▶│ TechnicalAnalyst  │
//! │ /coins/{id}  │   │ report       │   │ (stdout, │   │ (LlmProvider +    │
//! │ raw JSON     │   │ (top 5 tix)  │   │  JSON)   │   │  PostTemplate)    │
//! └──────────────┘   └──────────────┘   └──────────┘   └───────────────────┘
//! ```
//!
//! Fetch failures end the run quietly (`None`), missing fields become
//! defaults, and generation failures are returned for the caller to log.

pub mod analyst;
pub mod analyzer;
pub mod error;
pub mod extract;
pub mod model;
pub mod post_format;
pub mod report;
pub mod source;

pub use analyst::TechnicalAnalyst;
pub use analyzer::CryptoDataAnalyzer;
pub use error::{AnalystError, Result};
pub use extract::extract_report;
pub use model::{AssetReport, TickerSummary};
pub use post_format::{format_post, token_symbol, PostTemplate};
pub use report::Reporter;
pub use source::{CoinGeckoClient, CoinGeckoConfig, MarketDataSource, StaticMarketSource};

/// System prompt for the analyst model
pub const ANALYST_SYSTEM_PROMPT: &str = "You're a professional efficient crypto analyst.";
