//! Static Market Source
//!
//! Serves previously captured coin documents. Backs offline runs and tests.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use super::MarketDataSource;
use crate::error::{AnalystError, Result};

/// In-memory market data source keyed by asset id
#[derive(Debug, Default)]
pub struct StaticMarketSource {
    documents: HashMap<String, Value>,
}

impl StaticMarketSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document for an asset id
    pub fn with_document(mut self, asset_id: impl Into<String>, document: Value) -> Self {
        self.documents.insert(asset_id.into(), document);
        self
    }

    /// Load a raw document saved from the provider and serve it as `asset_id`
    pub fn from_file(asset_id: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&text)?;
        Ok(Self::new().with_document(asset_id, document))
    }
}

#[async_trait]
impl MarketDataSource for StaticMarketSource {
    async fn fetch_asset(&self, asset_id: &str) -> Result<Value> {
        self.documents
            .get(asset_id)
            .cloned()
            .ok_or_else(|| AnalystError::AssetNotFound {
                source_name: self.name().to_string(),
                asset_id: asset_id.to_string(),
            })
    }

    fn name(&self) -> &str {
        "StaticSource"
    }
}
