//! Report Extraction
//!
//! Reshapes a raw CoinGecko `/coins/{id}` document into an [`AssetReport`].
//! Every lookup is optional: absent objects, absent keys and values of the
//! wrong JSON type all fall back to the per-field defaults documented on
//! [`MarketData`], so extraction never fails on a non-empty document.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

use crate::model::{
    AssetReport, BasicInfo, CommunityData, DevelopmentData, MarketData, PriceChangePercentage,
    Supply, TickerSummary, MAX_TICKERS,
};

static EMPTY: Value = Value::Null;

/// Extract a report from a raw document.
///
/// Returns `None` for `null`, non-object and empty-object input.
pub fn extract_report(raw: &Value) -> Option<AssetReport> {
    let doc = raw.as_object().filter(|o| !o.is_empty())?;
    let field = |key: &str| doc.get(key).unwrap_or(&EMPTY);

    let market = field("market_data");
    let community = field("community_data");
    let developer = field("developer_data");

    Some(AssetReport {
        basic_info: BasicInfo {
            id: string(field("id")),
            name: string(field("name")),
            symbol: string(field("symbol")),
            categories: field("categories")
                .as_array()
                .map(|items| items.iter().filter_map(string).collect())
                .unwrap_or_default(),
            genesis_date: string(field("genesis_date")),
            market_cap_rank: count(field("market_cap_rank")).and_then(|r| u32::try_from(r).ok()),
        },
        market_data: MarketData {
            current_price_usd: usd(market, "current_price"),
            market_cap_usd: usd(market, "market_cap"),
            total_volume_usd: usd(market, "total_volume"),
            price_change_24h_usd: usd(market, "price_change_24h_in_currency"),
            price_change_percentage: PriceChangePercentage {
                h24: decimal_at(market, "price_change_percentage_24h"),
                d7: decimal_at(market, "price_change_percentage_7d"),
                d30: decimal_at(market, "price_change_percentage_30d"),
                y1: decimal_at(market, "price_change_percentage_1y"),
            },
            all_time_high_usd: usd(market, "ath"),
            all_time_low_usd: usd(market, "atl"),
            supply: Supply {
                circulating: decimal_at(market, "circulating_supply"),
                total: decimal_at(market, "total_supply"),
                max: decimal_at(market, "max_supply"),
            },
        },
        community: CommunityData {
            twitter_followers: count(get(community, "twitter_followers")),
            reddit_subscribers: count(get(community, "reddit_subscribers")),
            sentiment: decimal(field("sentiment_votes_up_percentage"), "sentiment_votes_up_percentage"),
        },
        development: DevelopmentData {
            github_stars: count(get(developer, "stars")),
            github_forks: count(get(developer, "forks")),
            recent_commits: count(get(developer, "commit_count_4_weeks")),
        },
        exchange_data: top_tickers(field("tickers")),
    })
}

/// Summarize every ticker, rank by USD volume (missing = 0), keep the top five.
pub fn top_tickers(tickers: &Value) -> Vec<TickerSummary> {
    let mut summaries: Vec<TickerSummary> = tickers
        .as_array()
        .map(|items| items.iter().map(summarize_ticker).collect())
        .unwrap_or_default();

    // stable: equal volumes keep provider order
    summaries.sort_by(|a, b| b.ranking_volume().cmp(&a.ranking_volume()));
    summaries.truncate(MAX_TICKERS);
    summaries
}

fn summarize_ticker(ticker: &Value) -> TickerSummary {
    let base = string(get(ticker, "base")).unwrap_or_default();
    let target = string(get(ticker, "target")).unwrap_or_default();

    TickerSummary {
        exchange: string(get(get(ticker, "market"), "name")),
        pair: format!("{}/{}", base, target),
        last_price: decimal_at(ticker, "last"),
        volume: decimal(get(get(ticker, "converted_volume"), "usd"), "converted_volume.usd"),
        trust_score: string(get(ticker, "trust_score")),
        spread: decimal_at(ticker, "bid_ask_spread_percentage"),
    }
}

fn get<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&EMPTY)
}

/// `value[key]["usd"]`, zero when any level is missing
fn usd(market: &Value, key: &str) -> Decimal {
    decimal(get(get(market, key), "usd"), key).unwrap_or(Decimal::ZERO)
}

fn decimal_at(value: &Value, key: &str) -> Option<Decimal> {
    decimal(get(value, key), key)
}

fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

/// JSON number to `Decimal`, going through the number's shortest textual form
/// so `0.1` stays `0.1`. Numbers outside `Decimal`'s range are clamped to the
/// nearest representable magnitude rather than dropped.
fn decimal(value: &Value, field: &str) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(i) = number.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Some(Decimal::from(u));
    }

    let float = number.as_f64()?;
    let text = number.to_string();
    let exact = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| Decimal::from_f64(float));
    match exact {
        // underflow must not collapse a present value into the zero default
        Some(d) if !(d.is_zero() && float != 0.0) => Some(d),
        _ => {
            let clamped = clamp_to_decimal(float);
            tracing::warn!(field, value = float, %clamped, "Number outside decimal range, clamped");
            Some(clamped)
        }
    }
}

fn clamp_to_decimal(float: f64) -> Decimal {
    let magnitude = if float.abs() >= 1.0 {
        Decimal::MAX
    } else {
        // smallest positive value at the maximum scale of 28
        Decimal::new(1, 28)
    };
    if float.is_sign_negative() { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn ticker(exchange: &str, volume: Option<f64>) -> Value {
        let mut t = json!({
            "base": "BTC",
            "target": "USDT",
            "market": {"name": exchange},
            "last": 97000.0,
            "trust_score": "green",
            "bid_ask_spread_percentage": 0.01
        });
        if let Some(v) = volume {
            t["converted_volume"] = json!({"usd": v});
        }
        t
    }

    #[test]
    fn test_absent_or_empty_input() {
        assert!(extract_report(&Value::Null).is_none());
        assert!(extract_report(&json!({})).is_none());
        assert!(extract_report(&json!([])).is_none());
        assert!(extract_report(&json!("bitcoin")).is_none());
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let raw = json!({
            "id": "bitcoin",
            "market_data": {},
            "community_data": {},
            "developer_data": {},
            "tickers": []
        });
        let report = extract_report(&raw).unwrap();

        assert_eq!(report.basic_info.id.as_deref(), Some("bitcoin"));
        assert!(report.basic_info.categories.is_empty());
        assert_eq!(report.market_data.current_price_usd, Decimal::ZERO);
        assert_eq!(report.market_data.market_cap_usd, Decimal::ZERO);
        assert_eq!(report.market_data.all_time_low_usd, Decimal::ZERO);
        assert_eq!(report.market_data.supply, Supply::default());
        assert_eq!(report.market_data.price_change_percentage, PriceChangePercentage::default());
        assert_eq!(report.community, CommunityData::default());
        assert_eq!(report.development, DevelopmentData::default());
        assert!(report.exchange_data.is_empty());
    }

    #[test]
    fn test_missing_sections_do_not_panic() {
        let report = extract_report(&json!({"name": "Bitcoin"})).unwrap();
        assert_eq!(report.basic_info.name.as_deref(), Some("Bitcoin"));
        assert_eq!(report.market_data.total_volume_usd, Decimal::ZERO);
        assert!(report.exchange_data.is_empty());
    }

    #[test]
    fn test_wrong_types_count_as_absent() {
        let raw = json!({
            "id": 42,
            "categories": "Layer 1",
            "market_data": {"current_price": "97500", "ath": {"usd": "high"}, "max_supply": [1]},
            "community_data": null,
            "developer_data": {"stars": -3},
            "tickers": {"not": "a list"}
        });
        let report = extract_report(&raw).unwrap();

        assert!(report.basic_info.id.is_none());
        assert!(report.basic_info.categories.is_empty());
        assert_eq!(report.market_data.current_price_usd, Decimal::ZERO);
        assert_eq!(report.market_data.all_time_high_usd, Decimal::ZERO);
        assert!(report.market_data.supply.max.is_none());
        assert!(report.development.github_stars.is_none());
        assert!(report.exchange_data.is_empty());
    }

    #[test]
    fn test_full_document() {
        let raw = json!({
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "btc",
            "categories": ["Cryptocurrency", "Layer 1 (L1)"],
            "genesis_date": "2009-01-03",
            "market_cap_rank": 1,
            "sentiment_votes_up_percentage": 84.5,
            "market_data": {
                "current_price": {"usd": 97500.5, "eur": 90000},
                "market_cap": {"usd": 1930000000000u64},
                "total_volume": {"usd": 25000000000u64},
                "price_change_24h_in_currency": {"usd": -420.1},
                "price_change_percentage_24h": -0.43,
                "price_change_percentage_7d": 2.1,
                "price_change_percentage_30d": 8.0,
                "price_change_percentage_1y": 120.7,
                "ath": {"usd": 108135},
                "atl": {"usd": 67.81},
                "circulating_supply": 19800000.0,
                "total_supply": 21000000.0,
                "max_supply": 21000000.0
            },
            "community_data": {"twitter_followers": 6800000, "reddit_subscribers": 7100000.0},
            "developer_data": {"stars": 73168, "forks": 36426, "commit_count_4_weeks": 108},
            "tickers": [ticker("Binance", Some(1.5e9))]
        });
        let report = extract_report(&raw).unwrap();

        assert_eq!(report.basic_info.symbol.as_deref(), Some("btc"));
        assert_eq!(report.basic_info.categories.len(), 2);
        assert_eq!(report.basic_info.genesis_date.as_deref(), Some("2009-01-03"));
        assert_eq!(report.basic_info.market_cap_rank, Some(1));
        assert_eq!(report.market_data.current_price_usd, dec!(97500.5));
        assert_eq!(report.market_data.market_cap_usd, dec!(1930000000000));
        assert_eq!(report.market_data.price_change_24h_usd, dec!(-420.1));
        assert_eq!(report.market_data.price_change_percentage.y1, Some(dec!(120.7)));
        assert_eq!(report.market_data.all_time_low_usd, dec!(67.81));
        assert_eq!(report.market_data.supply.max, Some(dec!(21000000)));
        assert_eq!(report.community.reddit_subscribers, Some(7_100_000));
        assert_eq!(report.community.sentiment, Some(dec!(84.5)));
        assert_eq!(report.development.recent_commits, Some(108));

        let top = &report.exchange_data[0];
        assert_eq!(top.exchange.as_deref(), Some("Binance"));
        assert_eq!(top.pair, "BTC/USDT");
        assert_eq!(top.volume, Some(dec!(1500000000)));
        assert_eq!(top.trust_score.as_deref(), Some("green"));
        assert_eq!(top.spread, Some(dec!(0.01)));
    }

    #[test]
    fn test_tickers_sorted_by_volume_descending() {
        let raw = json!({
            "id": "bitcoin",
            "tickers": [ticker("Small", Some(100.0)), ticker("NoVolume", None), ticker("Big", Some(500.0))]
        });
        let names: Vec<_> = extract_report(&raw)
            .unwrap()
            .exchange_data
            .into_iter()
            .map(|t| t.exchange.unwrap())
            .collect();
        assert_eq!(names, ["Big", "Small", "NoVolume"]);
    }

    #[test]
    fn test_tickers_capped_at_five() {
        for len in [0usize, 1, 5, 100] {
            let list: Vec<Value> = (0..len)
                .map(|i| ticker(&format!("ex{}", i), Some((i * 37 % 101) as f64)))
                .collect();
            let top = top_tickers(&Value::Array(list));

            assert_eq!(top.len(), len.min(MAX_TICKERS));
            assert!(top.windows(2).all(|w| w[0].ranking_volume() >= w[1].ranking_volume()));
        }
    }

    #[test]
    fn test_partial_ticker() {
        let top = top_tickers(&json!([{"base": "BTC"}]));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].pair, "BTC/");
        assert!(top[0].exchange.is_none());
        assert!(top[0].volume.is_none());
    }

    #[test]
    fn test_decimal_keeps_short_form() {
        assert_eq!(decimal(&json!(0.1), "price"), Some(dec!(0.1)));
        assert_eq!(decimal(&json!(1e-7), "price"), Some(dec!(0.0000001)));
        assert_eq!(decimal(&json!(null), "price"), None);
    }

    #[test]
    fn test_out_of_range_numbers_are_clamped_not_dropped() {
        let raw = json!({
            "id": "memecoin",
            "market_data": {
                "total_supply": 1.0e30,
                "max_supply": 9.9e28,
                "atl": {"usd": 1.5e-30},
                "market_cap": {"usd": 1.0e29},
                "price_change_percentage_1y": -2.0e30
            }
        });
        let market = extract_report(&raw).unwrap().market_data;

        assert_eq!(market.supply.total, Some(Decimal::MAX));
        assert_eq!(market.supply.max, Some(Decimal::MAX));
        assert_eq!(market.supply.circulating, None);
        assert_eq!(market.market_cap_usd, Decimal::MAX);
        assert_eq!(market.all_time_low_usd, Decimal::new(1, 28));
        assert_eq!(market.price_change_percentage.y1, Some(Decimal::MIN));
        assert_eq!(market.current_price_usd, Decimal::ZERO);
    }
}
