use commhub_provider::ProviderError;
use thiserror::Error;

/// Errors specific to the Twitter/X channel.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Twitter API returned an error response.
    #[error("Twitter API error: {0}")]
    Api(String),

    /// The dispatch payload is missing required fields or has invalid
    /// structure.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The provider received an HTTP 429 (Too Many Requests) response.
    #[error("rate limited by Twitter")]
    RateLimited,
}

impl From<TwitterError> for ProviderError {
    fn from(err: TwitterError) -> Self {
        match err {
            TwitterError::Http(e) => ProviderError::Connection(e.to_string()),
            TwitterError::Api(msg) => ProviderError::DispatchFailed(msg),
            TwitterError::InvalidPayload(msg) => ProviderError::InvalidMessage(msg),
            TwitterError::RateLimited => ProviderError::RateLimited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_maps_to_dispatch_failed() {
        let provider_err: ProviderError = TwitterError::Api("unauthorized".into()).into();
        assert!(matches!(provider_err, ProviderError::DispatchFailed(_)));
    }

    #[test]
    fn error_display() {
        let err = TwitterError::InvalidPayload("tweet text is empty".into());
        assert_eq!(err.to_string(), "invalid payload: tweet text is empty");
    }
}
