//! Command Line Arguments

use std::path::PathBuf;

use clap::Parser;

/// Fetch a coin snapshot, generate a technical-analysis post and publish it
#[derive(Debug, Clone, Parser)]
#[command(name = "chain-signal", version, about)]
pub struct Args {
    /// CoinGecko coin id
    #[arg(long, env = "COIN_ID", default_value = "bitcoin")]
    pub coin: String,

    /// Ticker used in the prompt and post heading
    #[arg(long, env = "TOKEN_SYMBOL", default_value = "BTC")]
    pub token: String,

    /// Write the extracted report to this JSON file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Read the raw coin document from a file instead of calling CoinGecko
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Submit the post; without this flag the post is only printed
    #[arg(long)]
    pub post: bool,

    /// Append hashtags to the post
    #[arg(long)]
    pub hashtags: bool,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}
