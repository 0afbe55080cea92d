//! X/Twitter Publishing
//!
//! Posts through the v2 `POST /2/tweets` endpoint with OAuth 1.0a user
//! context.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PublishError, Result};
use crate::oauth::OAuthSigner;
use crate::{PublishedPost, Publisher};

pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

const REQUIRED_VARS: [&str; 4] = ["API_KEY", "API_SECRET", "ACCESS_TOKEN", "ACCESS_TOKEN_SECRET"];

/// Posting credentials
#[derive(Clone)]
pub struct TwitterCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    /// App-only token; not used for user-context posting
    pub bearer_token: Option<String>,
    pub base_url: String,
}

impl std::fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("api_key", &self.api_key)
            .field("access_token", &self.access_token)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TwitterCredentials {
    /// Build from any key/value source; every missing required key is
    /// reported at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|key| present(**key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PublishError::MissingCredentials(missing));
        }

        let required = |key: &str| present(key).unwrap_or_default();
        Ok(Self {
            api_key: required("API_KEY"),
            api_secret: required("API_SECRET"),
            access_token: required("ACCESS_TOKEN"),
            access_token_secret: required("ACCESS_TOKEN_SECRET"),
            bearer_token: present("BEARER_TOKEN"),
            base_url: present("TWITTER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
        })
    }

    fn signer(&self) -> OAuthSigner {
        OAuthSigner::new(
            &self.api_key,
            &self.api_secret,
            &self.access_token,
            &self.access_token_secret,
        )
    }
}

#[derive(Debug, Serialize)]
struct CreateTweet<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
    text: String,
}

/// X API v2 client
pub struct TwitterClient {
    client: Client,
    signer: OAuthSigner,
    base_url: String,
}

impl TwitterClient {
    pub fn new(credentials: TwitterCredentials) -> Self {
        Self {
            client: Client::new(),
            signer: credentials.signer(),
            base_url: credentials.base_url,
        }
    }

    fn tweets_url(&self) -> String {
        format!("{}/2/tweets", self.base_url.trim_end_matches('/'))
    }

    fn status_error(status: StatusCode, body: String) -> PublishError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PublishError::Auth {
                status: status.as_u16(),
                body,
            },
            StatusCode::TOO_MANY_REQUESTS => PublishError::RateLimited(body),
            _ => PublishError::Api {
                status: status.as_u16(),
                body,
            },
        }
    }

    async fn create_tweet(&self, text: &str) -> Result<PublishedPost> {
        let url = self.tweets_url();
        let nonce = Uuid::new_v4().simple().to_string();
        let authorization = self
            .signer
            .authorization_header("POST", &url, &[], &nonce, Utc::now().timestamp())?;

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&CreateTweet { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        let created: CreateTweetResponse = response
            .json()
            .await
            .map_err(|e| PublishError::MalformedResponse(e.to_string()))?;

        Ok(PublishedPost {
            id: created.data.id,
            text: created.data.text,
        })
    }
}

#[async_trait]
impl Publisher for TwitterClient {
    async fn publish(&self, text: &str) -> Result<PublishedPost> {
        match self.create_tweet(text).await {
            Ok(post) => {
                tracing::info!(tweet_id = %post.id, "Tweet posted successfully");
                Ok(post)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error posting tweet");
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        "X"
    }
}
