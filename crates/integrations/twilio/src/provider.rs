use commhub_core::{Channel, DispatchReceipt, DispatchRequest};
use commhub_provider::{Provider, ProviderError};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::TwilioConfig;
use crate::error::TwilioError;
use crate::types::{CallResource, CreateCallRequest, MessageResource, SendMessageRequest};

/// Twilio provider covering both the SMS and phone call channels.
///
/// The dispatch request's channel selects the endpoint: [`Channel::Sms`]
/// posts to the Messages API, [`Channel::Call`] to the Calls API. Either way
/// exactly one authenticated POST is made and the returned SID is surfaced.
pub struct TwilioProvider {
    config: TwilioConfig,
    client: Client,
}

/// Fields extracted from an SMS dispatch payload.
#[derive(Debug, Deserialize)]
struct MessagePayload {
    to: Option<String>,
    from: Option<String>,
    body: Option<String>,
}

/// Fields extracted from a phone call dispatch payload.
#[derive(Debug, Deserialize)]
struct CallPayload {
    to: Option<String>,
    from: Option<String>,
    twiml_url: Option<String>,
}

impl TwilioProvider {
    /// Create a new Twilio provider with the given configuration.
    ///
    /// Uses a default `reqwest::Client` with reasonable timeouts.
    pub fn new(config: TwilioConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ProviderError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Create a new Twilio provider with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool across dispatches.
    pub fn with_client(config: TwilioConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the Messages API URL for this account.
    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base_url, self.config.account_sid
        )
    }

    /// Build the Calls API URL for this account.
    fn calls_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.config.api_base_url, self.config.account_sid
        )
    }

    /// Send an SMS message via the Twilio REST API.
    async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<MessageResource, TwilioError> {
        debug!(to = %request.to, "sending SMS via Twilio");

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(request)
            .send()
            .await?;

        let resource: MessageResource = check_response(response).await?;

        if let Some(code) = resource.error_code {
            let msg = resource
                .error_message
                .clone()
                .unwrap_or_else(|| format!("error code {code}"));
            return Err(TwilioError::Api(msg));
        }

        Ok(resource)
    }

    /// Initiate a voice call via the Twilio REST API.
    async fn create_call(&self, request: &CreateCallRequest) -> Result<CallResource, TwilioError> {
        debug!(to = %request.to, url = %request.url, "initiating call via Twilio");

        let response = self
            .client
            .post(self.calls_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(request)
            .send()
            .await?;

        let resource: CallResource = check_response(response).await?;

        if let Some(code) = resource.error_code {
            let msg = resource
                .error_message
                .clone()
                .unwrap_or_else(|| format!("error code {code}"));
            return Err(TwilioError::Api(msg));
        }

        Ok(resource)
    }

    async fn dispatch_sms(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, TwilioError> {
        let payload: MessagePayload = serde_json::from_value(request.payload.clone())
            .map_err(|e| TwilioError::InvalidPayload(format!("failed to parse payload: {e}")))?;

        let api_request = SendMessageRequest {
            to: payload
                .to
                .ok_or_else(|| TwilioError::InvalidPayload("payload must contain a 'to' phone number".into()))?,
            from: payload
                .from
                .ok_or_else(|| TwilioError::InvalidPayload("payload must contain a 'from' phone number".into()))?,
            body: payload
                .body
                .ok_or_else(|| TwilioError::InvalidPayload("payload must contain a 'body' message text".into()))?,
        };

        let resource = self.send_message(&api_request).await?;
        let sid = resource.sid.unwrap_or_default();

        let mut receipt =
            DispatchReceipt::sent(format!("SMS sent successfully! Message SID: {sid}"));
        if !sid.is_empty() {
            receipt = receipt.with_reference(sid);
        }
        Ok(receipt)
    }

    async fn dispatch_call(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, TwilioError> {
        let payload: CallPayload = serde_json::from_value(request.payload.clone())
            .map_err(|e| TwilioError::InvalidPayload(format!("failed to parse payload: {e}")))?;

        let api_request = CreateCallRequest {
            to: payload
                .to
                .ok_or_else(|| TwilioError::InvalidPayload("payload must contain a 'to' phone number".into()))?,
            from: payload
                .from
                .ok_or_else(|| TwilioError::InvalidPayload("payload must contain a 'from' phone number".into()))?,
            url: payload
                .twiml_url
                .ok_or_else(|| TwilioError::InvalidPayload("payload must contain a 'twiml_url'".into()))?,
        };

        let resource = self.create_call(&api_request).await?;
        let sid = resource.sid.unwrap_or_default();

        let mut receipt =
            DispatchReceipt::sent(format!("Call initiated successfully! Call SID: {sid}"));
        if !sid.is_empty() {
            receipt = receipt.with_reference(sid);
        }
        Ok(receipt)
    }
}

/// Surface HTTP-level failures (429, non-2xx) and decode the JSON body.
async fn check_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TwilioError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        warn!("Twilio API rate limit hit");
        return Err(TwilioError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TwilioError::Api(format!("HTTP {status}: {body}")));
    }

    Ok(response.json().await?)
}

impl Provider for TwilioProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "twilio"
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, provider = "twilio"))]
    async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, ProviderError> {
        let receipt = match request.channel {
            Channel::Sms => self.dispatch_sms(request).await?,
            Channel::Call => self.dispatch_call(request).await?,
            other => {
                return Err(ProviderError::InvalidMessage(format!(
                    "twilio provider cannot handle channel '{other}'"
                )));
            }
        };
        Ok(receipt)
    }
}
