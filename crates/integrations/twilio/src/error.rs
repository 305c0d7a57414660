use commhub_provider::ProviderError;
use thiserror::Error;

/// Errors specific to the Twilio channels.
///
/// These are internal errors that get converted into [`ProviderError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum TwilioError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Twilio API returned an error response.
    #[error("Twilio API error: {0}")]
    Api(String),

    /// The dispatch payload is missing required fields or has invalid
    /// structure.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The provider received an HTTP 429 (Too Many Requests) response.
    #[error("rate limited by Twilio")]
    RateLimited,
}

impl From<TwilioError> for ProviderError {
    fn from(err: TwilioError) -> Self {
        match err {
            TwilioError::Http(e) => ProviderError::Connection(e.to_string()),
            TwilioError::Api(msg) => ProviderError::DispatchFailed(msg),
            TwilioError::InvalidPayload(msg) => ProviderError::InvalidMessage(msg),
            TwilioError::RateLimited => ProviderError::RateLimited,
        }
    }
}
