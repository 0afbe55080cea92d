//! Domain Models
//!
//! The flat report produced from a raw CoinGecko coin document.
//! Uses `rust_decimal` for all monetary values, serialized as JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum number of exchange tickers kept in a report
pub const MAX_TICKERS: usize = 5;

/// Flattened, size-bounded summary of one cryptocurrency
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetReport {
    pub basic_info: BasicInfo,
    pub market_data: MarketData,
    pub community: CommunityData,
    pub development: DevelopmentData,
    /// Top tickers by USD volume, descending
    pub exchange_data: Vec<TickerSummary>,
}

/// Identity section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub genesis_date: Option<String>,
    pub market_cap_rank: Option<u32>,
}

/// Market metrics section
///
/// USD amounts default to zero when the provider omits them; percentage
/// changes and supply figures stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(with = "rust_decimal::serde::float")]
    pub current_price_usd: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub market_cap_usd: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_volume_usd: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_change_24h_usd: Decimal,
    pub price_change_percentage: PriceChangePercentage,
    #[serde(with = "rust_decimal::serde::float")]
    pub all_time_high_usd: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub all_time_low_usd: Decimal,
    pub supply: Supply,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChangePercentage {
    #[serde(rename = "24h", default, with = "rust_decimal::serde::float_option")]
    pub h24: Option<Decimal>,
    #[serde(rename = "7d", default, with = "rust_decimal::serde::float_option")]
    pub d7: Option<Decimal>,
    #[serde(rename = "30d", default, with = "rust_decimal::serde::float_option")]
    pub d30: Option<Decimal>,
    #[serde(rename = "1y", default, with = "rust_decimal::serde::float_option")]
    pub y1: Option<Decimal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub circulating: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max: Option<Decimal>,
}

/// Community metrics section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityData {
    pub twitter_followers: Option<u64>,
    pub reddit_subscribers: Option<u64>,
    /// Share of positive sentiment votes, in percent
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub sentiment: Option<Decimal>,
}

/// Development metrics section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentData {
    pub github_stars: Option<u64>,
    pub github_forks: Option<u64>,
    /// Commits over the last four weeks
    pub recent_commits: Option<u64>,
}

/// One exchange's quote for a trading pair
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    pub exchange: Option<String>,
    /// `BASE/TARGET`, e.g. `BTC/USDT`
    pub pair: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub last_price: Option<Decimal>,
    /// Converted volume in USD
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub volume: Option<Decimal>,
    pub trust_score: Option<String>,
    /// Bid/ask spread, in percent
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub spread: Option<Decimal>,
}

impl TickerSummary {
    /// Volume used for ranking; missing volume ranks as zero
    pub fn ranking_volume(&self) -> Decimal {
        self.volume.unwrap_or(Decimal::ZERO)
    }
}
