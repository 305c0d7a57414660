use commhub_core::{DispatchReceipt, DispatchRequest};
use commhub_provider::{Provider, ProviderError};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::FacebookConfig;
use crate::error::FacebookError;
use crate::types::{FeedPostRequest, FeedPostResponse, GraphErrorBody};

/// Facebook provider that publishes one feed post via the Graph API.
///
/// Posts to the configured page feed, or to `/me/feed` when no page id was
/// submitted, matching the original dashboard's optional "Page ID" field.
pub struct FacebookProvider {
    config: FacebookConfig,
    client: Client,
}

/// Fields extracted from a Facebook dispatch payload.
#[derive(Debug, Deserialize)]
struct PostPayload {
    message: Option<String>,
}

impl FacebookProvider {
    /// Create a new Facebook provider with the given configuration.
    pub fn new(config: FacebookConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ProviderError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Create a new Facebook provider with a custom HTTP client.
    pub fn with_client(config: FacebookConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the feed endpoint URL for the configured target.
    fn feed_url(&self) -> String {
        format!(
            "{}/{}/feed",
            self.config.api_base_url,
            self.config.feed_target()
        )
    }

    /// Publish one feed post and interpret the response.
    async fn publish_post(
        &self,
        request: &FeedPostRequest,
    ) -> Result<FeedPostResponse, FacebookError> {
        debug!(target = %self.config.feed_target(), "publishing Facebook feed post");

        let response = self.client.post(self.feed_url()).form(request).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Graph API rate limit hit");
            return Err(FacebookError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GraphErrorBody>(&body)
                .ok()
                .and_then(|e| e.error)
                .and_then(|e| e.message)
                .unwrap_or(body);
            return Err(FacebookError::Api(format!("HTTP {status}: {message}")));
        }

        Ok(response.json().await?)
    }
}

impl Provider for FacebookProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "facebook"
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, provider = "facebook"))]
    async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, ProviderError> {
        let payload: PostPayload = serde_json::from_value(request.payload.clone())
            .map_err(|e| FacebookError::InvalidPayload(format!("failed to parse payload: {e}")))?;

        let message = payload
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| FacebookError::InvalidPayload("post message must not be empty".into()))?;

        let response = self
            .publish_post(&FeedPostRequest {
                message,
                access_token: self.config.access_token.clone(),
            })
            .await?;

        let mut receipt = DispatchReceipt::sent("Posted to Facebook successfully!");
        if let Some(id) = response.id {
            receipt = receipt.with_reference(id);
        }
        Ok(receipt)
    }
}
