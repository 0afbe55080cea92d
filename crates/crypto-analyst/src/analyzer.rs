//! Market Analysis Workflow
//!
//! Fetch → extract → report for a single asset.

use std::io::{Stdout, Write};
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::extract::extract_report;
use crate::model::AssetReport;
use crate::report::Reporter;
use crate::source::MarketDataSource;

/// Runs the data half of the pipeline for one asset
pub struct CryptoDataAnalyzer<W: Write = Stdout> {
    source: Arc<dyn MarketDataSource>,
    asset_id: String,
    reporter: Reporter<W>,
}

impl CryptoDataAnalyzer<Stdout> {
    pub fn new(source: Arc<dyn MarketDataSource>, asset_id: impl Into<String>) -> Self {
        Self::with_reporter(source, asset_id, Reporter::stdout())
    }
}

impl<W: Write> CryptoDataAnalyzer<W> {
    pub fn with_reporter(
        source: Arc<dyn MarketDataSource>,
        asset_id: impl Into<String>,
        reporter: Reporter<W>,
    ) -> Self {
        Self {
            source,
            asset_id: asset_id.into(),
            reporter,
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Fetch the raw document; failures are logged and become `None`
    pub async fn fetch_data(&self) -> Option<Value> {
        match self.source.fetch_asset(&self.asset_id).await {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::error!(
                    asset_id = %self.asset_id,
                    source = self.source.name(),
                    error = %e,
                    "Request failed"
                );
                None
            }
        }
    }

    /// Complete workflow: fetch, extract, report.
    ///
    /// Returns `Ok(None)` when nothing could be fetched; extraction and
    /// reporting are skipped in that case. Errors are report write failures.
    pub async fn analyze(&mut self, save_path: Option<&Path>) -> Result<Option<AssetReport>> {
        let Some(raw) = self.fetch_data().await else {
            return Ok(None);
        };

        let report = extract_report(&raw);
        if report.is_none() {
            tracing::warn!(asset_id = %self.asset_id, "Provider returned an empty document");
        }

        self.reporter.generate_report(report.as_ref(), save_path)?;
        Ok(report)
    }
}
