//! chain-signal
//!
//! Fetches a CoinGecko snapshot for one coin, reduces it to a compact
//! report, asks an LLM for a short technical analysis and posts it to X.
//! Without `--post` the formatted post is printed instead.

mod cli;
mod config;
mod pipeline;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::cli::Args;
use crate::config::AppConfig;
use crate::pipeline::{failure_hint, Pipeline, RunOutcome};

fn init_tracing() {
    // stdout carries the report and the post
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing();

    // Load environment
    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let config = AppConfig::from_env(args.post).context("invalid configuration")?;
    if config.twitter.is_none() {
        tracing::info!("Dry run - pass --post to publish");
    }

    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("run", %run_id, coin = %args.coin, token = %args.token);

    let result: anyhow::Result<RunOutcome> = async {
        let pipeline = Pipeline::from_config(&args, config)?;
        pipeline.check_provider().await;
        pipeline.run().await
    }
    .instrument(span)
    .await;

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(hint) = failure_hint(&err) {
                tracing::error!(%run_id, "{}", hint);
            }
            return Err(err);
        }
    };

    match &outcome {
        RunOutcome::NoData => tracing::warn!("Run finished without market data"),
        RunOutcome::Finished(result) => tracing::info!(outcome = ?result, "Run finished"),
    }

    Ok(if outcome.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
