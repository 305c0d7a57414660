use chrono::Utc;
use commhub_core::{DispatchReceipt, DispatchRequest};
use commhub_provider::{Provider, ProviderError};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::TwitterConfig;
use crate::error::TwitterError;
use crate::oauth1;
use crate::types::{ApiErrorBody, TweetRequest, TweetResponse};

/// Twitter/X provider that posts one tweet via `POST /2/tweets`.
///
/// Each request is signed with OAuth 1.0a user context using the four
/// credentials submitted with the form; a fresh nonce and timestamp are
/// generated per dispatch.
pub struct TwitterProvider {
    config: TwitterConfig,
    client: Client,
}

/// Fields extracted from a tweet dispatch payload.
#[derive(Debug, Deserialize)]
struct TweetPayload {
    text: Option<String>,
}

impl TwitterProvider {
    /// Create a new Twitter provider with the given configuration.
    pub fn new(config: TwitterConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ProviderError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Create a new Twitter provider with a custom HTTP client.
    pub fn with_client(config: TwitterConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the tweet creation endpoint URL.
    fn tweets_url(&self) -> String {
        format!("{}/2/tweets", self.config.api_base_url)
    }

    /// Post one tweet and interpret the response.
    async fn post_tweet(&self, request: &TweetRequest) -> Result<TweetResponse, TwitterError> {
        let url = self.tweets_url();

        // The JSON body contributes no parameters to the OAuth signature.
        let authorization = oauth1::authorization_header(
            &self.config,
            "POST",
            &url,
            &[],
            &oauth1::nonce(),
            Utc::now().timestamp(),
        );

        debug!("posting tweet via Twitter API v2");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Twitter API rate limit hit");
            return Err(TwitterError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.detail.or(e.title))
                .unwrap_or(body);
            return Err(TwitterError::Api(format!("HTTP {status}: {message}")));
        }

        Ok(response.json().await?)
    }
}

impl Provider for TwitterProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "twitter"
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, provider = "twitter"))]
    async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, ProviderError> {
        let payload: TweetPayload = serde_json::from_value(request.payload.clone())
            .map_err(|e| TwitterError::InvalidPayload(format!("failed to parse payload: {e}")))?;

        let text = payload
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TwitterError::InvalidPayload("tweet text must not be empty".into()))?;

        let response = self.post_tweet(&TweetRequest { text }).await?;

        let mut receipt = DispatchReceipt::sent("Tweet posted successfully!");
        if let Some(data) = response.data {
            receipt = receipt.with_reference(data.id);
        }
        Ok(receipt)
    }
}
