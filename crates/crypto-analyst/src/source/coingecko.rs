//! CoinGecko Client
//!
//! Fetches `/coins/{id}` documents from the CoinGecko v3 API.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use serde_json::Value;

use super::MarketDataSource;
use crate::error::{AnalystError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Coin ids are a single path segment; only RFC 3986 unreserved bytes pass
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// CoinGecko client configuration
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    /// Sent as `x-cg-pro-api-key` when present; anonymous access otherwise
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl CoinGeckoConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("COIN_GECKO_API_KEY").filter(|k| !k.trim().is_empty());
        let base_url = lookup("COIN_GECKO_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Self { api_key, base_url }
    }
}

/// CoinGecko market data source
pub struct CoinGeckoClient {
    client: Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    pub fn new(config: CoinGeckoConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("CoinGecko API key not set - using anonymous rate limits");
        }
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn coin_url(&self, asset_id: &str) -> String {
        format!(
            "{}/coins/{}",
            self.config.base_url.trim_end_matches('/'),
            utf8_percent_encode(asset_id, PATH_SEGMENT)
        )
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn fetch_asset(&self, asset_id: &str) -> Result<Value> {
        let url = self.coin_url(asset_id);
        tracing::info!(asset_id, "Fetching coin document from CoinGecko");

        let mut request = self.client.get(&url).header("accept", "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalystError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn name(&self) -> &str {
        "CoinGecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: Option<&str>) -> CoinGeckoClient {
        CoinGeckoClient::new(CoinGeckoConfig {
            api_key: api_key.map(str::to_string),
            base_url: server.uri(),
        })
    }

    #[tokio::test]
    async fn test_fetch_sends_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/bitcoin"))
            .and(header("x-cg-pro-api-key", "CG-secret"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "bitcoin"})))
            .expect(1)
            .mount(&server)
            .await;

        let doc = client_for(&server, Some("CG-secret")).fetch_asset("bitcoin").await.unwrap();
        assert_eq!(doc["id"], "bitcoin");
    }

    #[tokio::test]
    async fn test_anonymous_fetch_omits_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/ethereum"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ethereum"})))
            .mount(&server)
            .await;

        client_for(&server, None).fetch_asset("ethereum").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get(API_KEY_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_http_error_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("coin not found"))
            .mount(&server)
            .await;

        let err = client_for(&server, None).fetch_asset("nope").await.unwrap_err();
        assert!(matches!(err, AnalystError::Http { status: 404, ref body } if body == "coin not found"));
    }

    #[tokio::test]
    async fn test_invalid_body_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, None).fetch_asset("bitcoin").await.unwrap_err();
        assert!(matches!(err, AnalystError::Serialization(_)));
    }

    #[test]
    fn test_config_from_lookup() {
        let config = CoinGeckoConfig::from_lookup(|k| (k == "COIN_GECKO_API_KEY").then(|| "CG-1".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("CG-1"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_coin_url_encodes_id_as_one_segment() {
        let client = CoinGeckoClient::new(CoinGeckoConfig::default());
        assert_eq!(client.coin_url("usd-coin"), format!("{DEFAULT_BASE_URL}/coins/usd-coin"));
        assert_eq!(
            client.coin_url("wrapped/btc?vs=usd"),
            format!("{DEFAULT_BASE_URL}/coins/wrapped%2Fbtc%3Fvs%3Dusd")
        );
    }
}
