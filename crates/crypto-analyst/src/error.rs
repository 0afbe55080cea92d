//! Error Types for Crypto Analyst

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalystError>;

#[derive(Error, Debug)]
pub enum AnalystError {
    #[error("Market data request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Asset not available from {source_name}: {asset_id}")]
    AssetNotFound { source_name: String, asset_id: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
