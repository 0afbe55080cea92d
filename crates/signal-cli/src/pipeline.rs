//! Pipeline Wiring
//!
//! fetch → extract → report → generate → format → validate → publish.

use std::path::PathBuf;
use std::sync::Arc;

use crypto_analyst::{
    CoinGeckoClient, CryptoDataAnalyzer, MarketDataSource, PostTemplate, StaticMarketSource,
    TechnicalAnalyst,
};
use signal_core::{GenerationOptions, LlmProvider};
use signal_publisher::{
    ConsolePublisher, PostOutcome, PostWorkflow, PublishError, Publisher, TwitterClient,
};
use signal_runtime::{DeepSeekProvider, OllamaProvider};

use crate::cli::Args;
use crate::config::{AppConfig, LlmBackend};

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing could be fetched or the document was empty
    NoData,
    Finished(PostOutcome),
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, RunOutcome::Finished(outcome) if outcome.is_posted())
    }
}

/// Short operator-facing hint for a failed run, when the failure came from
/// the publishing platform
pub fn failure_hint(err: &anyhow::Error) -> Option<&str> {
    err.downcast_ref::<PublishError>().map(PublishError::user_message)
}

/// Fully wired components for one run
pub struct Pipeline {
    source: Arc<dyn MarketDataSource>,
    provider: Arc<dyn LlmProvider>,
    publisher: Arc<dyn Publisher>,
    generation: GenerationOptions,
    coin: String,
    template: PostTemplate,
    save_path: Option<PathBuf>,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        provider: Arc<dyn LlmProvider>,
        publisher: Arc<dyn Publisher>,
        args: &Args,
    ) -> Self {
        Self {
            source,
            provider,
            publisher,
            generation: GenerationOptions::default(),
            coin: args.coin.clone(),
            template: PostTemplate::new(&args.token).with_hashtags(args.hashtags),
            save_path: args.save.clone(),
        }
    }

    /// Wire real components from configuration
    pub fn from_config(args: &Args, config: AppConfig) -> anyhow::Result<Self> {
        let source: Arc<dyn MarketDataSource> = match &args.input {
            Some(path) => Arc::new(StaticMarketSource::from_file(&args.coin, path)?),
            None => Arc::new(CoinGeckoClient::new(config.coingecko)),
        };

        let provider: Arc<dyn LlmProvider> = match config.llm {
            LlmBackend::DeepSeek(c) => Arc::new(DeepSeekProvider::from_config(c)),
            LlmBackend::Ollama(c) => Arc::new(OllamaProvider::from_config(c)),
        };

        let publisher: Arc<dyn Publisher> = match config.twitter {
            Some(credentials) => Arc::new(TwitterClient::new(credentials)),
            None => Arc::new(ConsolePublisher::stdout()),
        };

        Ok(Self::new(source, provider, publisher, args).with_generation(config.generation))
    }

    pub fn with_generation(mut self, generation: GenerationOptions) -> Self {
        self.generation = generation;
        self
    }

    /// Probe the LLM backend. An unreachable backend is logged, not fatal:
    /// the run still fetches and reports market data.
    pub async fn check_provider(&self) -> bool {
        let provider = self.provider.name();
        match self.provider.health_check().await {
            Ok(true) => {
                tracing::info!(provider, "LLM provider reachable");
                true
            }
            Ok(false) => {
                tracing::warn!(provider, "LLM provider not reachable");
                false
            }
            Err(e) => {
                tracing::warn!(provider, error = %e, "LLM provider health check failed");
                false
            }
        }
    }

    pub async fn run(self) -> anyhow::Result<RunOutcome> {
        let mut analyzer = CryptoDataAnalyzer::new(self.source, self.coin);
        let Some(report) = analyzer.analyze(self.save_path.as_deref()).await? else {
            tracing::warn!(coin = analyzer.asset_id(), "No market data - nothing to post");
            return Ok(RunOutcome::NoData);
        };
        let report_json = serde_json::to_string(&report)?;

        tracing::info!(
            provider = self.provider.name(),
            model = %self.generation.model,
            tickers = report.exchange_data.len(),
            "Generating technical analysis"
        );
        let analyst = TechnicalAnalyst::new(self.provider, self.template.token())
            .with_options(self.generation)
            .with_template(self.template);

        let workflow = PostWorkflow::new(Arc::new(analyst), self.publisher);
        let outcome = workflow.post(&report_json).await?;
        Ok(RunOutcome::Finished(outcome))
    }
}
